use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::cell::RefCell;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use termform::core::config::{self, ResolvedConfig};
use termform::tui::widget::Widget;
use termform::tui::widgets::{
    Button, ButtonColors, CheckList, CheckListColors, MenuList, MenuListColors, TextBox,
    TextBoxColors,
};
use termform::{Flow, FormError, FormValues, Palette, Rgb};

#[derive(Parser)]
#[command(name = "termform", about = "Admin server connection form")]
struct Args {
    /// TOML config file (default: ~/.termform/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "termform.log")]
    log_file: PathBuf,

    /// Log level override (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("termform: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&config, args.log_level);

    // Initialize file logger - stdout belongs to the form
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("termform starting up");

    let submitted = Rc::new(RefCell::new(None));
    let result = build_form(&resolved, Rc::clone(&submitted)).and_then(|(palette, widgets)| {
        termform::tui::run(palette, widgets, resolved.notice.clone())
    });

    match result {
        Ok(()) => {
            if let Some(values) = submitted.borrow().as_ref() {
                print_values(values);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Form failed: {e}");
            eprintln!("termform: {e}");
            ExitCode::FAILURE
        }
    }
}

type Form = (Palette, Vec<Box<dyn Widget>>);

fn build_form(
    config: &ResolvedConfig,
    submitted: Rc<RefCell<Option<FormValues>>>,
) -> Result<Form, FormError> {
    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    let mut palette = Palette::new();
    let ip_colors = TextBoxColors {
        label_fg: palette.register(WHITE, BLACK, 10)?,
        label_bg: palette.register(WHITE, BLACK, 21)?,
        text_fg: palette.register(Rgb::new(255, 0, 0), BLACK, 11)?,
        text_bg: palette.register(BLACK, Rgb::new(40, 40, 40), 22)?,
        highlight_fg: palette.register(Rgb::new(0, 255, 0), BLACK, 12)?,
        highlight_bg: palette.register(BLACK, Rgb::new(0, 80, 0), 23)?,
    };
    let exit_colors = ButtonColors {
        normal: palette.register(Rgb::new(0, 0, 255), BLACK, 13)?,
        highlight: palette.register(Rgb::new(0, 255, 255), BLACK, 14)?,
    };
    let option_colors = CheckListColors {
        checkbox: palette.register(Rgb::new(255, 255, 0), BLACK, 15)?,
        mark: palette.register(Rgb::new(255, 0, 255), BLACK, 16)?,
        label: palette.register(Rgb::new(200, 200, 200), BLACK, 17)?,
        highlight: palette.register(BLACK, WHITE, 18)?,
    };
    let menu_colors = MenuListColors {
        normal: palette.register(Rgb::new(100, 100, 100), BLACK, 19)?,
        highlight: palette.register(Rgb::new(200, 200, 200), BLACK, 20)?,
    };

    let widgets: Vec<Box<dyn Widget>> = vec![
        Box::new(
            TextBox::new(2, 2, "Enter the admin server IP: ", 50)
                .required(true)
                .with_index(1)
                .with_colors(ip_colors),
        ),
        Box::new(
            TextBox::new(3, 2, "Enter the admin server port: (Default: 32666) ", 50)
                .required(true)
                .with_index(2),
        ),
        Box::new(
            TextBox::new(4, 2, "Enter the admin username: ", 50)
                .required(true)
                .with_index(3),
        ),
        Box::new(
            TextBox::new(5, 2, "Enter the admin password: ", 50)
                .required(true)
                .with_index(4),
        ),
        Box::new(
            Button::new(7, 10, "Exit", |_: &FormValues| Flow::Exit)
                .with_index(5)
                .with_colors(exit_colors),
        ),
        Box::new(
            Button::new(7, 50, "Submit", move |values: &FormValues| {
                log::info!("Form submitted with {} values", values.len());
                *submitted.borrow_mut() = Some(values.clone());
                Flow::Continue
            })
            .validate(true)
            .with_index(6),
        ),
        Box::new(
            CheckList::new(6, 2, "Option 1", true)
                .with_index(7)
                .with_debounce(config.debounce)
                .with_colors(option_colors),
        ),
        Box::new(
            CheckList::new(6, 20, "Option 2", false)
                .with_index(8)
                .with_debounce(config.debounce),
        ),
        Box::new(
            MenuList::new(8, 2, "Menu Item 1", || Flow::Continue)
                .with_index(9)
                .with_colors(menu_colors),
        ),
        Box::new(MenuList::new(9, 2, "Menu Item 2", || Flow::Continue).with_index(10)),
    ];

    Ok((palette, widgets))
}

fn print_values(values: &FormValues) {
    println!("Form submitted with values:");
    for (key, value) in values.iter() {
        println!("  {key} = {value}");
    }
}
