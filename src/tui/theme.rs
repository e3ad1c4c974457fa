use ratatui::style::{Color, Modifier, Style};

use crate::model::Category;

/// Neon colour palette for the terminal UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub neon_blue: Color,
    pub neon_pink: Color,
    pub neon_purple: Color,
    pub amber: Color,
    pub destructive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0A, 0x0A, 0x14),
            surface: Color::Rgb(0x14, 0x14, 0x24),
            border: Color::Rgb(0x2A, 0x2A, 0x4A),
            text: Color::Rgb(0xE6, 0xE6, 0xF0),
            muted: Color::Rgb(0x7D, 0x7D, 0x9B),
            neon_blue: Color::Rgb(0x00, 0xD4, 0xFF),
            neon_pink: Color::Rgb(0xFF, 0x00, 0x80),
            neon_purple: Color::Rgb(0xB0, 0x4A, 0xFF),
            amber: Color::Rgb(0xF5, 0x9E, 0x0B),
            destructive: Color::Rgb(0xFF, 0x44, 0x44),
        }
    }
}

impl Theme {
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Work => self.neon_blue,
            Category::Personal => self.neon_pink,
            Category::Urgent => self.destructive,
            Category::Unassigned => self.muted,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.neon_blue)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn completed_task(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn selection(&self) -> Style {
        Style::default().bg(self.surface).add_modifier(Modifier::BOLD)
    }
}
