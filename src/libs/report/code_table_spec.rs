extern crate hamcrest2;

#[cfg(test)]
mod code_table_spec {
    use std::env;
    use hamcrest2::prelude::*;
    use crate::libs::report::code_table::{code_table, format_table};

    #[ctor::ctor]
    fn before_each() {
        env::set_var("RUST_LOG", "debug");
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[ctor::dtor]
    fn after_each() {}

    #[test]
    fn widths_out_of_range_are_rejected() {
        assert_that!(code_table(0), err());
        assert_that!(code_table(17), err());
        assert_that!(code_table(1), ok());
        assert_that!(code_table(16), ok());
    }

    #[test]
    fn three_bit_table() {
        let rows = code_table(3).unwrap();
        assert_that!(rows.len(), equal_to(8));
        let grays: Vec<&str> = rows.iter().map(|row| row.gray.as_str()).collect();
        assert_that!(grays, equal_to(vec!["000", "001", "011", "010", "110", "111", "101", "100"]));
        let binaries: Vec<&str> = rows.iter().map(|row| row.binary.as_str()).collect();
        assert_that!(binaries, equal_to(vec!["000", "001", "010", "011", "100", "101", "110", "111"]));
        assert_that!(rows[0].changed_bit, equal_to(None));
        assert_that!(rows[4].changed_bit, equal_to(Some(2)));
    }

    #[test]
    fn neighbouring_rows_differ_in_exactly_one_digit() {
        let rows = code_table(8).unwrap();
        for pair in rows.windows(2) {
            let differing = pair[0].gray.chars().zip(pair[1].gray.chars()).filter(|(a, b)| a != b).count();
            assert_that!(differing, equal_to(1));
        }
    }

    #[test]
    fn formatted_table_has_a_header_and_a_line_per_row() {
        let lines = format_table(&code_table(2).unwrap());
        assert_that!(lines.len(), equal_to(5));
        assert_that!(lines[0].as_str(), matches_regex("^Decimal +Binary +Gray +Changed bit$"));
        assert_that!(lines[3].as_str(), matches_regex("^ +2  10 +11 +1$"));
    }
}
