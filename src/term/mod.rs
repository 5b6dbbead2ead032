extern crate ansi_term;
extern crate linefeed;
use crate::lang::{Error, Keypad};
use crate::mach::{Calculator, Screen};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Signal};
use log::{debug, LevelFilter};

/// Command line configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "A four function keypad calculator")]
pub struct Config {
    /// Press these buttons, print the display, and exit.
    #[arg(long, short)]
    pub keys: Option<String>,

    /// Redraw the display after every button instead of every line.
    #[arg(long)]
    pub trace: bool,

    /// Plain output without terminal styling.
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the keypad at startup.
    #[arg(long)]
    pub no_keypad: bool,

    #[arg(long, short, default_value = "warn")]
    pub log_level: String,
}

pub fn main() {
    let config = Config::parse();
    let log_level_filter = config.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();
    debug!("{:?}", config);
    let result = match &config.keys {
        Some(keys) => batch(&config, keys),
        None => main_loop(&config),
    };
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn batch(config: &Config, keys: &str) -> std::io::Result<bool> {
    let mut calculator = Calculator::new();
    let mut out = String::new();
    let ok = enter(config, &mut calculator, keys, &mut out);
    print!("{}", out);
    Ok(ok)
}

fn main_loop(config: &Config) -> std::io::Result<bool> {
    let interface = Interface::new("calc")?;
    interface.set_report_signal(Signal::Interrupt, true);
    interface.set_prompt("> ")?;
    let mut calculator = Calculator::new();

    if !config.no_keypad {
        interface.write_fmt(format_args!("{}\n", render_keypad(config)))?;
    }
    interface.write_fmt(format_args!(
        "{}\n",
        render_screen(config, &calculator.screen(), None)
    ))?;

    loop {
        match interface.read_line()? {
            ReadResult::Input(string) => {
                let mut out = String::new();
                if enter(config, &mut calculator, &string, &mut out) {
                    interface.add_history_unique(string);
                }
                interface.write_fmt(format_args!("{}", out))?;
            }
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                calculator = Calculator::new();
                interface.write_fmt(format_args!(
                    "{}\n",
                    render_screen(config, &calculator.screen(), None)
                ))?;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(true)
}

/// Presses a typed line of buttons and renders the result into `out`.
/// Returns false when the line had unknown buttons.
fn enter(config: &Config, calculator: &mut Calculator, line: &str, out: &mut String) -> bool {
    let mut pressed = false;
    let errors = calculator.enter_with(line, |key, calc| {
        pressed = true;
        if config.trace {
            out.push_str(&format!("[{}]\n", key));
            out.push_str(&render_screen(config, &calc.screen(), calc.fault()));
            out.push('\n');
        }
    });
    if !errors.is_empty() {
        for error in errors.iter() {
            out.push_str(&render_error(config, error));
            out.push('\n');
        }
        return false;
    }
    if pressed && !config.trace {
        out.push_str(&render_screen(config, &calculator.screen(), calculator.fault()));
        out.push('\n');
    }
    true
}

fn paint(config: &Config, style: Style, s: &str) -> String {
    if config.no_color {
        s.to_string()
    } else {
        style.paint(s).to_string()
    }
}

fn render_error(config: &Config, error: &Error) -> String {
    paint(config, Style::new().bold(), &format!("?{}", error))
}

/// Draws both display lines, plus the cause when "Error" is showing.
fn render_screen(config: &Config, screen: &Screen, fault: Option<&Error>) -> String {
    let mut s = String::new();
    s.push_str(&paint(config, Style::new().dimmed(), &screen.expression));
    s.push('\n');
    s.push_str(&paint(config, Style::new().bold(), &screen.result));
    if let Some(error) = fault {
        s.push('\n');
        s.push_str(&paint(config, Style::new().dimmed(), &format!("?{}", error)));
    }
    s
}

fn render_keypad(config: &Config) -> String {
    let rows: Vec<String> = Keypad::rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| {
                    let label = format!("[{:^5}]", button.label);
                    if button.operator || button.action.is_some() {
                        paint(config, Style::new().bold(), &label)
                    } else {
                        label
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    rows.join("\n")
}
