use crate::app::{AppMode, RenderState, ReselectView};
use crate::formula::{Token, TokenKind, INVALID_RESULT};
use crate::suggest::Suggestion;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

pub const PLACEHOLDER: &str = "Add tag, number (e.g., -5, 1/2, 3.14), or operand...";

fn token_style(token: &Token, focused: bool) -> Style {
    let style = match token.kind {
        TokenKind::Tag if token.suggestion.is_some() => Style::default()
            .fg(colors::tag())
            .add_modifier(Modifier::BOLD),
        TokenKind::Tag => Style::default()
            .fg(colors::unresolved_tag())
            .add_modifier(Modifier::ITALIC),
        TokenKind::Operand => Style::default().fg(colors::operand()),
        TokenKind::Number => Style::default().fg(colors::text()),
    };
    if focused {
        style.fg(colors::focus()).add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Tags render as `[name]`, everything else as typed.
pub fn token_text(token: &Token) -> String {
    match token.kind {
        TokenKind::Tag => format!("[{}]", token.value),
        _ => token.value.clone(),
    }
}

/// The committed tokens followed by the live input (or the placeholder).
pub fn render_formula_line(state: &RenderState) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for token in &state.tokens {
        spans.push(Span::styled(
            token_text(token),
            token_style(token, state.is_focused(token.id)),
        ));
        spans.push(Span::raw(" "));
    }

    if state.input.is_empty() && state.tokens.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors::dimmed())));
    } else {
        spans.push(Span::styled(
            state.input.clone(),
            Style::default().fg(colors::text()),
        ));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::bordered().title(" Formula "))
        .style(Style::default().bg(colors::background()))
}

/// Display width of the formula line up to the input cursor.
pub fn cursor_offset(state: &RenderState) -> u16 {
    use unicode_width::UnicodeWidthStr;

    let tokens: usize = state
        .tokens
        .iter()
        .map(|token| token_text(token).width() + 1)
        .sum();
    (tokens + state.input.width()).min(u16::MAX as usize) as u16
}

fn suggestion_item(suggestion: &Suggestion) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(suggestion.name.clone(), Style::default().fg(colors::tag())),
        Span::styled(
            format!(" ({})", suggestion.category),
            Style::default().fg(colors::dimmed()),
        ),
    ]))
}

fn list_highlight() -> Style {
    Style::default()
        .fg(colors::focus())
        .add_modifier(Modifier::REVERSED)
}

/// Dropdown for the active query: a loading line, an empty notice, or the
/// matching suggestions with the highlight selected.
pub fn render_suggestions(state: &RenderState) -> (List<'static>, ListState) {
    let block = Block::bordered().title(" Suggestions ");

    let items: Vec<ListItem> = if state.loading {
        vec![ListItem::new(Span::styled(
            "Loading...",
            Style::default().fg(colors::dimmed()),
        ))]
    } else if state.suggestions.is_empty() {
        vec![ListItem::new(Span::styled(
            "No suggestions found",
            Style::default().fg(colors::dimmed()),
        ))]
    } else {
        state.suggestions.iter().map(suggestion_item).collect()
    };

    let selected = if state.loading || state.suggestions.is_empty() {
        None
    } else {
        state.highlighted
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(list_highlight());
    (list, ListState::default().with_selected(selected))
}

/// Candidate list for the focused tag.
pub fn render_reselect(view: &ReselectView) -> (List<'static>, ListState) {
    let items: Vec<ListItem> = if view.candidates.is_empty() {
        vec![ListItem::new(Span::styled(
            "No suggestions loaded",
            Style::default().fg(colors::dimmed()),
        ))]
    } else {
        view.candidates.iter().map(suggestion_item).collect()
    };

    let list = List::new(items)
        .block(Block::bordered().title(" Resolve tag "))
        .highlight_style(list_highlight());
    (list, ListState::default().with_selected(view.selected))
}

pub fn render_result(result: &str) -> Paragraph<'static> {
    let style = if result == INVALID_RESULT {
        Style::default().fg(colors::invalid())
    } else {
        Style::default().fg(colors::text())
    };
    Paragraph::new(Line::from(vec![
        Span::styled("Result: ", Style::default().fg(colors::dimmed())),
        Span::styled(result.to_string(), style.add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Left)
    .style(Style::default().bg(colors::background()))
}

pub fn help_text(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Reselecting => "←/→ tag  ↑/↓ choose  Enter apply  Esc back",
        _ => "Type a tag or number, Enter to add · operand + Space · Tab pick · ← resolve tags · Ctrl-L clear · Ctrl-C quit",
    }
}

pub fn render_help(mode: AppMode) -> Paragraph<'static> {
    Paragraph::new(help_text(mode))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}
