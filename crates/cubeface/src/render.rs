//! Text rendering of the cube as an unfolded net.
//!
//! ```text
//!           U
//!         L F R B
//!           D
//! ```

use cubeface_core::{FaceId, Faces, SIDE_LEN, Tile};
use cubeface_prefs::{FaceColors, Preferences};
use itertools::Itertools;
use owo_colors::{OwoColorize, Style};

use crate::controls::Controls;

/// Width of one tile, in columns.
const CELL_WIDTH: usize = 3;
/// Width of one face plus the gap after it, in columns.
const FACE_STRIDE: usize = CELL_WIDTH * SIDE_LEN + 1;

/// How to draw tiles.
#[derive(Debug, Clone)]
pub struct NetStyle {
    /// Color of each face, or `None` to draw face letters without color.
    pub colors: Option<FaceColors>,
    /// Whether to draw the back face.
    pub show_back: bool,
    /// Whether to draw tile values instead of face letters.
    pub tile_numbers: bool,
}

impl NetStyle {
    /// Returns the style described by `prefs`, with color forced off if
    /// `color` is false.
    pub fn from_prefs(prefs: &Preferences, color: bool) -> Self {
        Self {
            colors: (color && prefs.color).then_some(prefs.colors),
            show_back: prefs.show_back,
            tile_numbers: prefs.tile_numbers,
        }
    }
}

/// Draws the net, marking the selected front row and column.
///
/// The back face is drawn in its stored orientation, which is how it looks
/// when seen from behind with the up face on top.
pub fn render_net(faces: &Faces, style: &NetStyle, controls: &Controls) -> String {
    let mut out = String::new();
    let indent = " ".repeat(FACE_STRIDE);

    let band: &[FaceId] = match style.show_back {
        true => &[FaceId::Left, FaceId::Front, FaceId::Right, FaceId::Back],
        false => &[FaceId::Left, FaceId::Front, FaceId::Right],
    };

    for row in 0..SIDE_LEN {
        out += &indent;
        out += &render_row(faces, FaceId::Up, row, style);
        out.push('\n');
    }
    for row in 0..SIDE_LEN {
        let line = band
            .iter()
            .map(|&face| render_row(faces, face, row, style))
            .join(" ");
        out += &line;
        if controls.row == Some(row) {
            out += " <";
        }
        out.push('\n');
    }
    for row in 0..SIDE_LEN {
        out += &indent;
        out += &render_row(faces, FaceId::Down, row, style);
        out.push('\n');
    }
    if let Some(column) = controls.column {
        let offset = FACE_STRIDE + CELL_WIDTH * column + CELL_WIDTH / 2;
        out += &format!("{:offset$}^\n", "");
    }

    out
}

fn render_row(faces: &Faces, face: FaceId, row: usize, style: &NetStyle) -> String {
    faces[face].row(row).iter().map(|&tile| render_tile(tile, style)).join("")
}

fn render_tile(tile: Tile, style: &NetStyle) -> String {
    let label = match style.tile_numbers {
        true => char::from(b'0' + tile.number()),
        false if style.colors.is_some() => ' ',
        false => tile.symbol(),
    };
    let cell = format!(" {label} ");
    match &style.colors {
        Some(colors) => {
            let [r, g, b] = colors.get(tile).rgb;
            let [tr, tg, tb] = colors.get(tile).contrasting_text().rgb;
            let tile_style = Style::new().on_truecolor(r, g, b).truecolor(tr, tg, tb);
            cell.style(tile_style).to_string()
        }
        None => cell,
    }
}
