//! Pixel-stream protocol checks through the public API

use tftcanvas::display::DisplayOp;
use tftcanvas::{Align, Canvas, Display, FrameBufferDisplay, RecordingDisplay, Rgb565, Window, MONO_6X8};

#[test]
fn test_text_pixel_count_for_every_alignment() {
    let texts = ["", "x", "hello", "exactly20 columns!!", "far too long for this window"];
    for align in [Align::Left, Align::Center, Align::Right] {
        for text in texts {
            for w in [1u16, 6, 19, 20, 21, 120] {
                let mut disp = RecordingDisplay::new(160, 128);
                Canvas::new(&mut disp, &MONO_6X8)
                    .draw_text(5, 5, w, align, text)
                    .unwrap();
                let runs = disp.runs();
                assert_eq!(runs.len(), 1);
                assert_eq!(runs[0].0.area() as usize, runs[0].1.len());
                assert_eq!(runs[0].1.len(), w as usize * 8);
            }
        }
    }
}

#[test]
fn test_fill_rectangle_sequence() {
    let mut disp = RecordingDisplay::new(160, 128);
    Canvas::new(&mut disp, &MONO_6X8).fill_rectangle(1, 2, 3, 4, Rgb565::RED);

    let mut expected = vec![DisplayOp::SetWindow(Window::new(1, 2, 3, 4))];
    expected.extend(std::iter::repeat(DisplayOp::Pixel(Rgb565::RED)).take(12));
    assert_eq!(disp.ops(), expected.as_slice());
}

#[test]
fn test_hline_thickness_three() {
    let mut disp = RecordingDisplay::new(160, 128);
    let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
    canvas.set_thickness(3);
    canvas.draw_hline(30, 40, 10);
    assert_eq!(disp.windows(), vec![Window::new(29, 39, 14, 4)]);
    assert_eq!(disp.pixels().len(), 14 * 4);
}

#[test]
fn test_hline_default_thickness() {
    let mut disp = RecordingDisplay::new(160, 128);
    Canvas::new(&mut disp, &MONO_6X8).draw_hline(30, 40, 10);
    assert_eq!(disp.windows(), vec![Window::new(30, 40, 11, 2)]);
}

#[test]
fn test_hline_at_origin_clamps() {
    let mut disp = RecordingDisplay::new(160, 128);
    let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
    canvas.set_thickness(4);
    canvas.draw_hline(0, 0, 10);
    canvas.draw_vline(0, 0, 10);
    assert_eq!(
        disp.windows(),
        vec![Window::new(0, 0, 15, 5), Window::new(0, 0, 5, 15)]
    );
}

#[test]
fn test_repeated_setter_gives_identical_output() {
    let mut once = RecordingDisplay::new(160, 128);
    {
        let mut canvas = Canvas::new(&mut once, &MONO_6X8);
        canvas.set_foreground(Rgb565::RED);
        canvas.draw_text(0, 0, 30, Align::Center, "AB").unwrap();
    }
    let mut twice = RecordingDisplay::new(160, 128);
    {
        let mut canvas = Canvas::new(&mut twice, &MONO_6X8);
        canvas.set_foreground(Rgb565::RED);
        canvas.set_foreground(Rgb565::RED);
        canvas.draw_text(0, 0, 30, Align::Center, "AB").unwrap();
    }
    assert_eq!(once.ops(), twice.ops());
}

#[test]
fn test_framebuffer_text_lands_column_major() {
    let mut disp = FrameBufferDisplay::new(32, 16);
    {
        let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
        canvas.set_background(Rgb565::DARKGREY);
        canvas.draw_text(2, 4, 12, Align::Right, "|").unwrap();
    }
    assert_eq!(disp.remaining(), 0);
    // '|' is 00 00 77 00 00 00, drawn at columns 6..12 of the window
    let x = 2 + 6 + 2;
    let column: Vec<Rgb565> = (0..8).map(|row| disp.pixel(x, 4 + row).unwrap()).collect();
    let (on, off) = (Rgb565::WHITE, Rgb565::DARKGREY);
    assert_eq!(column, vec![on, on, on, off, on, on, on, off]);
    assert_eq!(disp.pixel(2, 4), Some(off));
    assert_eq!(disp.pixel(1, 4), Some(Rgb565::BLACK));
    assert_eq!(disp.pixel(14, 4), Some(Rgb565::BLACK));
}

#[test]
fn test_framebuffer_clear_then_lines() {
    let mut disp = FrameBufferDisplay::new(20, 10);
    {
        let mut canvas = Canvas::new(&mut disp, &MONO_6X8);
        canvas.clear(Rgb565::DARKGREY);
        canvas.set_thickness(0);
        canvas.draw_vline(5, 2, 3);
    }
    assert_eq!(disp.pixel(5, 2), Some(Rgb565::WHITE));
    assert_eq!(disp.pixel(5, 5), Some(Rgb565::WHITE));
    assert_eq!(disp.pixel(5, 6), Some(Rgb565::DARKGREY));
    assert_eq!(disp.pixel(6, 3), Some(Rgb565::DARKGREY));
    assert_eq!(disp.width(), 20);
}
