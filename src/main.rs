use anyhow::Result;
use clap::Parser;
use local_config::LocalConfig;

mod app;
mod cli;
mod local_config;
mod util;

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let local_config = LocalConfig::new(args.config)?;

    let mut app = app::App::new(local_config);

    match args.command {
        cli::Commands::Ago {
            reference,
            target,
            lang,
            precise,
        } => {
            app.handle_ago(&reference, target.as_deref(), lang, precise)?;
        }
        cli::Commands::Plural { count, unit, lang } => {
            app.handle_plural(count, unit, lang)?;
        }
        cli::Commands::Translit { text, divider } => {
            app.handle_translit(&text, divider.as_deref())?;
        }
        cli::Commands::Name { full_name } => {
            app.handle_name(full_name.as_deref())?;
        }
        cli::Commands::Initials { first, last } => {
            app.handle_initials(first.as_deref(), last.as_deref())?;
        }
        cli::Commands::Shift {
            value,
            unit,
            from,
            format,
        } => {
            app.handle_shift(value, unit, from.as_deref(), format.as_deref())?;
        }
        cli::Commands::Dp { dp, density } => {
            app.handle_dp(dp, density)?;
        }
        cli::Commands::Keyboard {
            root_height,
            visible_height,
            density,
            margin_dp,
        } => {
            app.handle_keyboard(root_height, visible_height, density, margin_dp)?;
        }
        cli::Commands::Config(config) => match config {
            cli::Config::Show => {
                app.handle_show_config()?;
            }
            cli::Config::Init { force } => {
                app.handle_init_config(force)?;
            }
        },
    }

    Ok(())
}
