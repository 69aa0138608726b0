//! SVG serialization of a recorded frame.
//!
//! Snapshots make frames diffable in review and serve as the `render`
//! output of the CLI. Only the primitives in
//! [`appton_core::DrawCommand`] need mapping.

use appton_core::{Color, DrawCommand, DrawList, FontWeight, TextAlign, TextStyle};
use std::fmt::Write as _;

/// Serialize a frame as a standalone SVG document.
#[must_use]
pub fn to_svg(list: &DrawList) -> String {
    let width = list.viewport.width;
    let height = list.viewport.height;

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    out.push('\n');

    for command in list.commands() {
        write_command(&mut out, command);
    }

    out.push_str("</svg>\n");
    out
}

fn write_command(out: &mut String, command: &DrawCommand) {
    match command {
        DrawCommand::Rect {
            rect,
            radius,
            color,
        } => {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{}" fill-opacity="{}"/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                hex(color),
                color.a
            );
        }
        DrawCommand::RectOutline {
            rect,
            radius,
            color,
            width,
        } => {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                hex(color),
                color.a
            );
        }
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{}" fill-opacity="{}"/>"#,
                center.x,
                center.y,
                hex(color),
                color.a
            );
        }
        DrawCommand::CircleOutline {
            center,
            radius,
            color,
            width,
        } => {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{radius}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
                center.x,
                center.y,
                hex(color),
                color.a
            );
        }
        DrawCommand::Line {
            from,
            to,
            color,
            width,
        } => {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                hex(color),
                color.a
            );
        }
        DrawCommand::Text {
            text,
            position,
            style,
        } => {
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" font-weight="{}" text-anchor="{}" fill="{}" fill-opacity="{}">{}</text>"#,
                position.x,
                position.y,
                style.size,
                weight(style),
                anchor(style),
                hex(&style.color),
                style.color.a,
                escape(text)
            );
        }
        DrawCommand::Image {
            source,
            rect,
            corner_radius: _,
        } => {
            let _ = writeln!(
                out,
                r#"  <image x="{}" y="{}" width="{}" height="{}" href="{}"/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                escape(source)
            );
        }
    }
}

fn hex(color: &Color) -> String {
    color.to_hex()
}

const fn weight(style: &TextStyle) -> u32 {
    match style.weight {
        FontWeight::Normal => 400,
        FontWeight::Medium => 500,
        FontWeight::Semibold => 600,
        FontWeight::Bold => 700,
    }
}

const fn anchor(style: &TextStyle) -> &'static str {
    match style.align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

/// Escape text for XML content and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
