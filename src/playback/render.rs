use crate::shared::Snapshot;

const CELL_WIDTH: usize = 4;

/// Draws the building as text, top floor first, with one column per elevator.
///
/// ```text
///     | E0 | E1 |
///   2 |    | ## |
///   1 |    |    |
///   0 | ## |    |
/// ```
pub fn render_snapshot(snapshot: &Snapshot, n_floors: u8) -> String {
    let mut out = String::from("    |");
    for elevator in 0..snapshot.len() {
        out.push_str(&format!("{:^width$}|", format!("E{}", elevator), width = CELL_WIDTH));
    }
    out.push('\n');

    for floor in (0..=n_floors).rev() {
        out.push_str(&format!("{:>3} |", floor));
        for &position in &snapshot.floors {
            let cell = if position == floor { "##" } else { "" };
            out.push_str(&format!("{:^width$}|", cell, width = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}
