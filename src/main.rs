//! Terminal tank runner (default binary).
//!
//! Startup loads the mandatory sprites (fatal on failure) and the stage grid
//! (best-effort), then runs a fixed-step loop: poll terminal events until the
//! next tick, step the simulation with the held controls, render.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use tui_tanks::config::AppConfig;
use tui_tanks::core::{GameState, StepOutcome, TileGrid};
use tui_tanks::input::HeldControls;
use tui_tanks::logging;
use tui_tanks::term::{
    target_tps, FrameBuffer, GameView, HudStatus, SpriteSet, TerminalRenderer, TickRateMeter,
    Viewport,
};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let sprites = SpriteSet::load(&config.asset_dir)?;
    let grid = TileGrid::load(&config.game.stage_path);
    let mut game = GameState::new(config.game.geometry(), grid);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &sprites, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting after {} steps", game.steps());
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    sprites: &SpriteSet,
    config: &AppConfig,
) -> Result<()> {
    let view = GameView::new(config.cell_w, config.cell_h);
    let mut held = HeldControls::with_key_release_timeout_ms(config.key_release_timeout_ms)
        .with_release_events(term.reports_key_release());
    let mut meter = TickRateMeter::new();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let tick_duration = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudStatus {
            actual_tps: meter.actual_tps(),
            target_tps: target_tps(config.tick_ms),
            cursor: held.cursor(),
        };
        view.render_into(&game.snapshot(), sprites, Some(&hud), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    held.handle_key(key, now_ms());
                }
                Event::Mouse(mouse) => held.handle_mouse(&mouse),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now = now_ms();
            held.expire(now);
            meter.record(now);

            if game.step(&held.state()) == StepOutcome::Terminate {
                return Ok(());
            }
        }
    }
}
