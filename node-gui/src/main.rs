#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, sync::Arc};

use tracing::{error, info};

use node_gui::{
    args::{parse_args, CliOptions},
    config::{Config, ConfigFile},
    dir::NodeDirectory,
    export::export_icons,
    gallery::Gallery,
    logger::{parse_log_level, setup_logger},
    window::{create_app_settings, create_window_settings, window_title, APP_ID},
    VERSION,
};
use node_ui::{ChainStyle, ImageProvider, Size};

/// Size the window icon is rendered at.
const WINDOW_ICON_SIZE: Size = Size::square(256);

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let cli = CliOptions::from_args(args)?;

    let datadir = match cli.datadir.clone() {
        Some(datadir) => datadir,
        None => NodeDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let file = ConfigFile::from_file(&datadir)?;
    let config = Config::new(datadir, cli, file, parse_log_level()?);

    setup_logger(config.log_level, &config.datadir)?;
    setup_panic_hook();

    let style = ChainStyle::new(config.network)?;
    info!(
        "Starting node-gui {} on {} in {} mode",
        VERSION,
        style.network(),
        config.app_mode.mode()
    );
    let provider = ImageProvider::new(Arc::new(style));

    if let Some(export) = &config.export {
        export_icons(&provider, &export.directory, export.icon_size)?;
        return Ok(());
    }

    let title = window_title(provider.network_style());
    let window_settings = create_window_settings(
        APP_ID,
        &config.app_mode,
        provider.resolve("app", WINDOW_ICON_SIZE),
    );
    let app_mode = config.app_mode;

    if let Err(e) = iced::application(Gallery::title, Gallery::update, Gallery::view)
        .settings(create_app_settings(APP_ID))
        .window(window_settings)
        .run_with(move || Gallery::new(provider, app_mode, title))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}
