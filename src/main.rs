use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use folio::logging;
use folio::models::Profile;
use folio::storage::{load_profile, render_profile};
use folio::ui::{self, App, render};

/// 空闲时的最长等待，保证窗口大小变化能及时重绘
const MAX_IDLE: Duration = Duration::from_millis(250);

/// Terminal portfolio with a typewriter hero banner
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
struct Cli {
    /// Profile TOML file (defaults to ~/.config/folio/profile.toml)
    #[arg(long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Print the built-in profile as TOML and exit
    #[arg(long)]
    print_default_profile: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_profile {
        print!("{}", render_profile(&Profile::default())?);
        return Ok(());
    }

    logging::init_tracing();

    // 加载资料
    let profile = load_profile(cli.profile.as_deref()).context("failed to load profile")?;
    info!(name = %profile.name, roles = profile.roles.len(), "starting folio");

    // 创建应用状态
    let mut app = App::new(profile, !cli.light)?;

    let mut terminal = setup_terminal()?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 先停掉动画，再恢复终端
    app.animation.dispose();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("folio exited");
    result
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// 进入 raw mode 和备用屏幕；中途失败时先恢复终端再返回错误
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .context("failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout())).context("failed to create terminal")
        });
    if terminal.is_err() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    terminal
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| render(f, app))?;

    loop {
        let timeout = app
            .animation
            .time_until_next()
            .map_or(MAX_IDLE, |wait| wait.min(MAX_IDLE));

        let mut dirty = false;
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if ui::handle_key_event(app, key.code) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        dirty |= app.animation.poll();
        if dirty {
            terminal.draw(|f| render(f, app))?;
        }
    }
    Ok(())
}
