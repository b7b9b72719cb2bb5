//! ASCII preview of a board, for the CLI and for snapshot tests

use crate::grid::Item;

/// Render the board as one character per cell: `.` for empty space, the
/// first character of the item id for covered cells, `!` where two items
/// claim the same cell.
pub fn render_ascii(items: &[Item], w: i32, h: i32) -> String {
    let (uw, uh) = (w.max(0) as usize, h.max(0) as usize);
    let mut cells = vec![b'.'; uw * uh];

    for item in items {
        let mark = item.id.bytes().next().unwrap_or(b'#');
        let x0 = item.rect.x.max(0);
        let y0 = item.rect.y.max(0);
        let x1 = item.rect.right().min(w);
        let y1 = item.rect.bottom().min(h);
        for y in y0..y1 {
            for x in x0..x1 {
                let cell = &mut cells[y as usize * uw + x as usize];
                *cell = if *cell == b'.' { mark } else { b'!' };
            }
        }
    }

    cells
        .chunks(uw.max(1))
        .map(|row| String::from_utf8_lossy(row).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
