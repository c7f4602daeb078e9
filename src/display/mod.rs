/// Rendering layer.  All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// world coordinates into terminal cells and state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use side_shooter::entities::{
    Bounds, BulletSource, EnemyBullet, EnemyKind, GameMode, GameState, Projectile,
};
use side_shooter::weapons::{self, WEAPONS};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_HEALTH: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY_NORMAL: Color = Color::Red;
const C_ENEMY_SHOOTER: Color = Color::Magenta;
const C_BOSS: Color = Color::DarkRed;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_BULLET_BOSS: Color = Color::Red;
const C_GLITCH: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

// ── World → terminal mapping ─────────────────────────────────────────────────

/// The play area inside the border: columns `1..cols-1`, rows `2..rows-2`.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    fn play_cols(&self) -> f32 {
        self.cols.saturating_sub(2).max(1) as f32
    }

    fn play_rows(&self) -> f32 {
        self.rows.saturating_sub(4).max(1) as f32
    }

    /// Cell for a world point, clamped inside the border.
    fn cell(&self, state: &GameState, x: f32, y: f32) -> (u16, u16) {
        let cx = (x / state.width * self.play_cols()).clamp(0.0, self.play_cols() - 1.0);
        let cy = (y / state.height * self.play_rows()).clamp(0.0, self.play_rows() - 1.0);
        (1 + cx as u16, 2 + cy as u16)
    }

    /// Cells covered by a world box; always at least one.
    fn span(&self, state: &GameState, b: &Bounds) -> (u16, u16, u16, u16) {
        let (c0, r0) = self.cell(state, b.left(), b.top());
        let (c1, r1) = self.cell(state, b.right(), b.bottom());
        (c0, r0, (c1 - c0).max(1), (r1 - r0).max(1))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, state, view)?;

    if state.mode != GameMode::MainMenu {
        for enemy in &state.enemies {
            let (c, r, w, _) = view.span(state, &enemy.bounds());
            let (glyph, color) = match enemy.kind {
                EnemyKind::Normal => ("◄", C_ENEMY_NORMAL),
                EnemyKind::Shooter => ("«", C_ENEMY_SHOOTER),
            };
            out.queue(cursor::MoveTo(c, r))?;
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(glyph.repeat(w as usize)))?;
        }
        if let Some(boss) = &state.boss {
            draw_block(out, view.span(state, &boss.bounds()), "█", C_BOSS)?;
        }
        for bullet in &state.enemy_bullets {
            draw_enemy_bullet(out, state, view, bullet)?;
        }
        for rocket in &state.projectiles {
            draw_projectile(out, state, view, rocket)?;
        }
        draw_player(out, state, view)?;
    }

    match state.mode {
        GameMode::MainMenu => draw_main_menu(out, view)?,
        GameMode::Paused => draw_pause_menu(out, state, view)?,
        GameMode::GameOver => draw_game_over(out, state, view)?,
        GameMode::Playing => draw_controls_hint(out, view)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", state.score)))?;

    let level_str = format!("[ LEVEL {} ]", state.level);
    let lx = (view.cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let weapon = state.player.weapon.stats();
    let hearts: String = "♥".repeat(state.player.health as usize);
    let right_str = format!("{}  Health:{}", weapon.name, hearts);
    let rx = view.cols.saturating_sub(right_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(palette(weapon.color)))?;
    out.queue(Print(format!("{}  ", weapon.name)))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(format!("Health:{}", hearts)))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn palette(color: weapons::Color) -> Color {
    match color {
        weapons::Color::Yellow => Color::Yellow,
        weapons::Color::Cyan => Color::Cyan,
        weapons::Color::Orange => Color::DarkYellow,
    }
}

fn draw_block<W: Write>(
    out: &mut W,
    (c, r, w, h): (u16, u16, u16, u16),
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    let line = glyph.repeat(w as usize);
    for row in r..r + h {
        out.queue(cursor::MoveTo(c, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let (c, r) = view.cell(state, state.player.x, state.player.y);
    out.queue(cursor::MoveTo(c, r))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print("▶"))?;
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
    rocket: &Projectile,
) -> std::io::Result<()> {
    let (c, r) = view.cell(state, rocket.x, rocket.y);
    out.queue(cursor::MoveTo(c, r))?;
    if rocket.glitch {
        out.queue(style::SetForegroundColor(C_GLITCH))?;
        out.queue(Print("×"))?;
    } else {
        out.queue(style::SetForegroundColor(palette(rocket.color)))?;
        out.queue(Print("─"))?;
    }
    Ok(())
}

fn draw_enemy_bullet<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
    bullet: &EnemyBullet,
) -> std::io::Result<()> {
    let (c, r) = view.cell(state, bullet.x, bullet.y);
    out.queue(cursor::MoveTo(c, r))?;
    match bullet.source {
        BulletSource::Enemy => {
            out.queue(style::SetForegroundColor(C_BULLET_ENEMY))?;
            out.queue(Print("•"))?;
        }
        BulletSource::Boss => {
            out.queue(style::SetForegroundColor(C_BULLET_BOSS))?;
            out.queue(Print("●"))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ / W S : Move   SPACE : Shoot   ESC : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: Viewport,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_main_menu<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let lines = vec![
        ("★  SIDE  SHOOTER  ★".to_string(), Color::Cyan),
        (String::new(), Color::White),
        ("ENTER - Play".to_string(), Color::White),
        ("Q - Quit".to_string(), Color::DarkGrey),
    ];
    draw_centered(out, view, &lines)
}

fn draw_pause_menu<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let mut lines = vec![
        ("╔══════════════════╗".to_string(), Color::Cyan),
        ("║      PAUSED      ║".to_string(), Color::Cyan),
        ("╚══════════════════╝".to_string(), Color::Cyan),
        ("Weapon shop:".to_string(), Color::White),
    ];
    for (slot, weapon) in WEAPONS.iter().enumerate() {
        let owned = weapon.id == state.player.weapon;
        let color = if owned {
            palette(weapon.color)
        } else if state.score >= weapon.cost {
            Color::White
        } else {
            Color::DarkGrey
        };
        let tag = if owned { " (equipped)" } else { "" };
        lines.push((
            format!("[{}] {:<8} {:>4} pts{}", slot + 1, weapon.name, weapon.cost, tag),
            color,
        ));
    }
    lines.push((
        "ESC/C - Continue  R - Restart  M - Menu".to_string(),
        Color::White,
    ));
    draw_centered(out, view, &lines)
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let lines = vec![
        ("╔══════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER    ║".to_string(), Color::Red),
        ("╚══════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {}", state.score), Color::Yellow),
        (format!("Reached level {}", state.level), Color::Yellow),
        ("R - Try Again  M - Menu  Q - Quit".to_string(), Color::White),
    ];
    draw_centered(out, view, &lines)
}
