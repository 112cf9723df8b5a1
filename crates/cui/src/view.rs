use crate::app::{App, Highlight};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Span, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use scoundrel_core::{Card, CardKind, EngineSnapshot, HealthBand, Severity, ROOM_SLOTS};

pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.engine.snapshot();
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Min(8),
            Constraint::Length(10),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app, &snapshot);
    draw_room(frame, root[1], app, &snapshot);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[2]);
    draw_player(frame, middle[0], app, &snapshot);
    draw_piles(frame, middle[1], &snapshot);
    draw_events(frame, root[3], app);

    if snapshot.game_over {
        draw_game_over(frame, &snapshot);
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, snapshot: &EngineSnapshot) {
    let title = format!("Scoundrel | Hint: {}", app.next_hint());
    let summary = format!(
        "HP {}/{}  Deck {}  Discard {}  Seed {}",
        snapshot.hp, snapshot.max_hp, snapshot.deck_size, snapshot.discard_size, snapshot.seed
    );
    let status = Line::from(vec![
        Span::raw("Status: "),
        Span::styled(
            app.status_line.clone(),
            Style::default().fg(severity_color(app.status_severity)),
        ),
    ]);
    let lines = vec![Line::from(title.bold()), Line::from(summary), status];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_room(frame: &mut Frame, area: Rect, app: &App, snapshot: &EngineSnapshot) {
    let outer = pane_block("Room", !snapshot.game_over);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, ROOM_SLOTS as u32); ROOM_SLOTS])
        .split(inner);

    for (slot, column) in columns.iter().enumerate() {
        let view = snapshot.room.iter().find(|view| view.slot == slot);
        let focused = app.cursor == slot && view.is_some();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{}", slot + 1));
        let Some(view) = view else {
            block = block.border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(
                Paragraph::new("empty")
                    .alignment(Alignment::Center)
                    .fg(Color::DarkGray)
                    .block(block),
                *column,
            );
            continue;
        };
        let mut border = Style::default();
        if let Some(highlight) = app.highlight_of(&view.card) {
            border = border.fg(highlight_color(highlight));
        }
        if focused {
            border = border.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        block = block.border_style(border);
        let mut face = Style::default().fg(card_color(&view.card));
        if !view.usable {
            face = face.add_modifier(Modifier::DIM);
        }
        let role = match view.kind {
            CardKind::Health => format!("heal {}", view.card.value),
            CardKind::Weapon => format!("weapon {}", view.card.value),
            CardKind::Monster if view.usable => format!("monster {}", view.card.value),
            CardKind::Monster => "too strong".to_string(),
        };
        let lines = vec![
            Line::styled(view.card.short_label(), face.add_modifier(Modifier::BOLD)),
            Line::styled(role, face),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            *column,
        );
    }
}

fn draw_player(frame: &mut Frame, area: Rect, app: &App, snapshot: &EngineSnapshot) {
    let block = pane_block("Player", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    let mut label = format!("{}/{}", snapshot.hp, snapshot.max_hp);
    if let Some(flash) = app.hp_flash {
        label.push_str(&format!(" ({:+})", flash.delta));
    }
    let ratio = if snapshot.max_hp == 0 {
        0.0
    } else {
        f64::from(snapshot.hp) / f64::from(snapshot.max_hp)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(band_color(snapshot.health_band)))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, rows[0]);

    let mut lines = Vec::new();
    match snapshot.weapon {
        Some(weapon) => {
            lines.push(Line::from(format!(
                "Weapon: {} (protection {})",
                app.card_label(&weapon),
                snapshot.protection
            )));
            let mut stack = vec![Span::raw("Slain: ")];
            if snapshot.monsters.is_empty() {
                stack.push(Span::raw("-"));
            }
            for monster in &snapshot.monsters {
                let style = match app.highlight_of(monster) {
                    Some(highlight) => Style::default().fg(highlight_color(highlight)),
                    None => Style::default(),
                };
                stack.push(Span::styled(format!("{} ", monster.short_label()), style));
            }
            lines.push(Line::from(stack));
            lines.push(Line::from(match snapshot.stack_ceiling {
                Some(ceiling) => format!("Next monster must be below {ceiling}"),
                None => "Any monster can be fought".to_string(),
            }));
        }
        None => lines.push(Line::from("Weapon: bare hands".fg(Color::DarkGray))),
    }
    lines.push(Line::from(""));
    lines.push(action_line(snapshot));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[1]);
}

fn action_line(snapshot: &EngineSnapshot) -> Line<'static> {
    let enabled = |on: bool| {
        if on {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    Line::from(vec![
        Span::styled("[r] run", enabled(snapshot.can_run)),
        Span::raw("  "),
        Span::styled("[w] drop weapon", enabled(snapshot.can_discard_weapon)),
        Span::raw("  "),
        Span::styled("[n] restart", enabled(true)),
    ])
}

fn draw_piles(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot) {
    let top = snapshot
        .discard_top
        .map(|card| card.short_label())
        .unwrap_or_else(|| "-".to_string());
    let lines = vec![
        Line::from(format!("Dungeon: {} cards", snapshot.deck_size)),
        Line::from(format!("Discard: {} cards, top {}", snapshot.discard_size, top)),
        Line::from(format!(
            "Ran last room: {}",
            if snapshot.just_ran { "yes" } else { "no" }
        )),
    ];
    let block = pane_block("Piles", false);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = pane_block("Events", false);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_game_over(frame: &mut Frame, snapshot: &EngineSnapshot) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);
    let (title, color, headline) = if snapshot.victory {
        ("Victory", Color::Green, "The dungeon is cleared.")
    } else {
        ("Defeat", Color::Red, "You died in the dungeon.")
    };
    let lines = vec![
        Line::from(headline.bold()),
        Line::from(format!("HP left: {}", snapshot.hp)),
        Line::from(""),
        Line::from("n / enter: new dungeon   q: quit"),
    ];
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("q quit | ? help | esc close"),
        Line::from("1-4 use the card in that room slot"),
        Line::from("left/right or h/l move | enter/space use focused card"),
        Line::from("r run from room | w drop weapon and its stack | n restart"),
        Line::from(""),
        Line::from("Hearts heal, diamonds are weapons, clubs and spades are monsters."),
        Line::from("A weapon only fights monsters weaker than the last one it slew."),
        Line::from("You may not run from two rooms in a row."),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn card_color(card: &Card) -> Color {
    match card.kind() {
        CardKind::Health => Color::LightRed,
        CardKind::Weapon => Color::LightYellow,
        CardKind::Monster => Color::White,
    }
}

fn highlight_color(highlight: Highlight) -> Color {
    match highlight {
        Highlight::Dealt => Color::Cyan,
        Highlight::Refused => Color::Red,
        Highlight::Stacked => Color::Magenta,
    }
}

fn band_color(band: HealthBand) -> Color {
    match band {
        HealthBand::Healthy => Color::Green,
        HealthBand::Wounded => Color::Yellow,
        HealthBand::Critical => Color::Red,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    block
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
