use pixoo_display::{Command, Display, DisplayError, Transport, TransportError};
use pixoo_protocol::payload;
use proptest::prelude::*;

/// Transport that keeps every command it is given
#[derive(Default)]
struct RecordingTransport {
    sent: Vec<Command>,
}

impl Transport for RecordingTransport {
    fn send(&mut self, _address: &str, command: &Command) -> Result<(), TransportError> {
        self.sent.push(command.clone());
        Ok(())
    }
}

fn display(size: usize) -> Display<RecordingTransport> {
    Display::new("10.0.0.5", size, RecordingTransport::default())
}

fn pic_data(command: &Command) -> &str {
    match command {
        Command::SendHttpGif { pic_data, .. } => pic_data,
        other => panic!("expected a frame upload, got {other:?}"),
    }
}

fn pic_id(command: &Command) -> u32 {
    match command {
        Command::SendHttpGif { pic_id, .. } => *pic_id,
        other => panic!("expected a frame upload, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn index_is_injective(
        size in 1usize..=64,
        a in (0usize..64, 0usize..64),
        b in (0usize..64, 0usize..64),
    ) {
        let d = display(size);
        let (ax, ay) = (a.0 % size, a.1 % size);
        let (bx, by) = (b.0 % size, b.1 % size);
        let ia = d.index(ax, ay).unwrap();
        prop_assert_eq!(ia, d.index(ax, ay).unwrap());
        prop_assert_eq!(ia == d.index(bx, by).unwrap(), (ax, ay) == (bx, by));
        prop_assert!(ia + 2 < 3 * size * size);
    }

    #[test]
    fn index_rejects_outside(size in 1usize..=32, x in 0usize..100, y in 0usize..100) {
        let d = display(size);
        prop_assert_eq!(d.index(x, y).is_ok(), x < size && y < size);
    }

    #[test]
    fn set_pixel_touches_only_its_triplet(
        size in 1usize..=16,
        x in 0usize..16,
        y in 0usize..16,
        rgb in (any::<i32>(), any::<i32>(), any::<i32>()),
    ) {
        let (x, y) = (x % size, y % size);
        let mut d = display(size);
        d.fill(7, 7, 7);
        d.set_pixel(x, y, rgb.0, rgb.1, rgb.2).unwrap();

        let index = d.index(x, y).unwrap();
        let written = [rgb.0, rgb.1, rgb.2].map(payload::narrow_channel);
        let bytes = d.buffer().to_bytes();
        for (i, &byte) in bytes.iter().enumerate() {
            let expected = if (index..index + 3).contains(&i) {
                written[i - index]
            } else {
                7
            };
            prop_assert_eq!(byte, expected);
        }
    }

    #[test]
    fn fill_covers_every_pixel(
        size in 1usize..=32,
        r in any::<i32>(),
        g in any::<i32>(),
        b in any::<i32>(),
    ) {
        let mut d = display(size);
        d.fill(r, g, b);
        for y in 0..size {
            for x in 0..size {
                prop_assert_eq!(d.get_pixel(x, y).unwrap(), [r, g, b]);
            }
        }
    }

    #[test]
    fn glyph_writes_only_lit_cells(
        c in prop::sample::select("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars().collect::<Vec<_>>()),
        x in 0usize..13,
        y in 0usize..11,
    ) {
        let mut d = display(16);
        d.fill(1, 2, 3);
        d.draw_character(c, x, y, 200, 100, 50).unwrap();

        let glyph = pixoo_display::font::glyph(c).unwrap();
        let width = usize::from(glyph.width());
        for py in 0..16 {
            for px in 0..16 {
                let lit = px >= x
                    && py >= y
                    && px - x < width
                    && py - y < usize::from(glyph.height())
                    && glyph.cells()[(px - x) + (py - y) * width] == 1;
                let expected = if lit { [200, 100, 50] } else { [1, 2, 3] };
                prop_assert_eq!(d.get_pixel(px, py).unwrap(), expected);
            }
        }
    }

    #[test]
    fn unknown_glyph_leaves_buffer(c in "[a-z]", x in 0usize..16, y in 0usize..16) {
        let c = c.chars().next().unwrap();
        let mut d = display(16);
        d.set_pixel(x, y, 9, 8, 7).unwrap();
        let before = d.buffer().clone();
        prop_assert_eq!(
            d.draw_character(c, x, y, 255, 255, 255),
            Err(DisplayError::UnknownGlyph(c))
        );
        prop_assert_eq!(d.buffer(), &before);
    }

    #[test]
    fn frame_ids_increase_by_one(pushes in 1usize..20) {
        let mut d = display(4);
        for _ in 0..pushes {
            d.push().unwrap();
        }
        let ids: Vec<u32> = d.transport().sent.iter().map(pic_id).collect();
        let expected: Vec<u32> = (1..=pushes as u32).collect();
        prop_assert_eq!(ids, expected);
        prop_assert_eq!(d.frame_id(), pushes as u32 + 1);
    }
}

#[test]
fn push_payload_round_trips_boundary_values() {
    let mut d = display(2);
    d.set_pixel(0, 0, 0, 1, 255).unwrap();
    d.set_pixel(1, 0, 256, -1, 0).unwrap();
    d.set_pixel(0, 1, -1, 256, 1).unwrap();
    d.set_pixel(1, 1, 255, 0, 256).unwrap();
    d.push().unwrap();

    let bytes = payload::decode(pic_data(&d.transport().sent[0])).unwrap();
    assert_eq!(bytes, vec![0, 1, 255, 0, 255, 0, 255, 0, 1, 255, 0, 0]);
    assert_eq!(bytes, d.buffer().to_bytes());
}

#[test]
fn push_scenario_wire_body() {
    let mut d = display(2);
    d.set_pixel(1, 1, 255, 0, 0).unwrap();
    d.push().unwrap();

    let body = d.transport().sent[0].to_json().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["Command"], "Draw/SendHttpGif");
    assert_eq!(value["PicWidth"], 2);
    assert_eq!(value["PicID"], 1);
    assert_eq!(value["PicData"], "AAAAAAAAAAAA/wAA");
    assert_eq!(d.frame_id(), 2);
}
