#[macro_use]
extern crate clap;

use std::error::Error;
use std::io;

use clap::{App, Arg, ArgMatches};
use log::{debug, error, info};
use simple_error::bail;

use graycode::libs::config_dir::config_dir;
use graycode::libs::config_file::config_file::ConfigurationStore;
use graycode::libs::menu::menu::{Menu, MenuSettings};
use graycode::libs::report::code_table::{code_table, format_table};
use graycode::libs::report::report::{ConversionReport, InputKind};
use graycode::libs::util::logging::initialise_logging;
use graycode::libs::util::version::VERSION;

const VALUE: &'static str = "value";
const TABLE_BITS: &'static str = "bits";
const SHOW_MISREAD: &'static str = "misread";
const PAUSE: &'static str = "pause";

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Mode {
        Interactive,
        Decimal,
        Binary,
        Gray,
        Table,
        ConfigFileLocation
    }
}

fn parse_command_line<'a>() -> (ArgMatches<'a>, Mode) {
    let result = App::new("graycode")
        .version(VERSION)
        .about("Converts values between decimal, binary and reflected binary (Gray) code")

        .arg(Arg::from_usage("<mode> 'The mode to use, usually Interactive.'").possible_values(&Mode::variants()).default_value("Interactive"))

        .arg(Arg::with_name(VALUE)
            .index(2)
            .allow_hyphen_values(true)
            .help("The value to convert, in the representation named by the Decimal, Binary or Gray mode"))

        .arg(Arg::with_name(TABLE_BITS)
            .short("b").long("bits").help("Sets the number of digits shown in Table mode")
            .value_name("table width in bits").takes_value(true))

        .arg(Arg::with_name(SHOW_MISREAD)
            .short("m").long("misread").help("Sets whether to show the Gray code's value when read as plain binary")
            .possible_values(&["on", "off"]).takes_value(true))

        .arg(Arg::with_name(PAUSE)
            .short("p").long("pause").help("Sets whether the interactive menu waits for Enter after each result")
            .possible_values(&["on", "off"]).takes_value(true))

        .get_matches();

    let mode = value_t!(result.value_of("mode"), Mode).unwrap_or(Mode::Interactive);

    return (result, mode);
}

fn run(arguments: ArgMatches, mode: Mode) -> Result<i32, Box<dyn Error>> {
    let home_dir = dirs::home_dir();
    let config_path = config_dir::configuration_directory(home_dir)?;
    let config_path_clone = config_path.clone();
    let mut config = ConfigurationStore::new(config_path)?;
    if mode == Mode::ConfigFileLocation {
        info!("Configuration path is [{:?}]", config_path_clone);
        info!("Configuration file is [{:?}]", config.get_config_file_path());
        return Ok(0)
    }

    configure_display_settings(&arguments, &mut config)?;

    let settings = MenuSettings {
        show_misinterpretation: config.get_show_misinterpretation(),
        pause_after_result: config.get_pause_after_result(),
    };

    let kind = match mode {
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout(), settings);
            menu.run()?;
            return Ok(0)
        }
        Mode::Table => {
            let rows = code_table(config.get_table_bits())?;
            for line in format_table(&rows) {
                println!("{}", line);
            }
            return Ok(0)
        }
        Mode::Decimal => InputKind::Decimal,
        Mode::Binary => InputKind::Binary,
        Mode::Gray => InputKind::Gray,
        Mode::ConfigFileLocation => return Ok(0),
    };

    let value = match arguments.value_of(VALUE) {
        Some(value) => value,
        None => bail!("The {:?} mode needs a value to convert", mode),
    };
    let report = ConversionReport::from_input(kind, value)?;
    for line in report.lines(settings.show_misinterpretation) {
        println!("{}", line);
    }
    Ok(0)
}

fn configure_display_settings(arguments: &ArgMatches, config: &mut ConfigurationStore) -> Result<(), Box<dyn Error>> {
    if let Some(show) = arguments.value_of(SHOW_MISREAD) {
        info!("Setting misread display {}", show);
        config.set_show_misinterpretation(show == "on")?;
    }
    if let Some(pause) = arguments.value_of(PAUSE) {
        info!("Setting pause after result {}", pause);
        config.set_pause_after_result(pause == "on")?;
    }
    if let Some(bits_str) = arguments.value_of(TABLE_BITS) {
        match bits_str.parse::<u8>() {
            Ok(bits) => {
                info!("Setting table width to {} bits", bits);
                config.set_table_bits(bits)?;
            }
            Err(_) => {
                bail!("Setting {}: Could not set table width to '{}' - not an integer", TABLE_BITS, bits_str);
            }
        }
    }
    Ok(())
}

fn main() {
    initialise_logging();

    let (arguments, mode) = parse_command_line();
    debug!("Command line parsed");

    match run(arguments, mode) {
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
    }
}
