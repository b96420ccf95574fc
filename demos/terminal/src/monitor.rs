//! Character frame buffer that presents itself to the terminal.

use std::fmt::Write as _;
use std::io::{self, Write};

use tracing::warn;

use ms_core::{Point, SimConfig, Size};
use ms_entity::Drawer;
use ms_sim::{RunSummary, SimObserver, TickReport};

const BORDER: char = '+';
const EMPTY: char = ' ';

/// Move the cursor to the top-left corner without clearing.
const CURSOR_HOME: &str = "\x1b[H";
const CLEAR_SCREEN: &str = "\x1b[2J";

/// Grid of glyphs plus a title and two header lines, redrawn in place every
/// tick.
pub struct Monitor {
    size:   Size,
    pixels: Vec<char>,
    title:  String,
    header: String,
    info:   String,
    frame:  String,
    /// First write failure; later frames are skipped once set.
    error:  Option<io::Error>,
}

impl Monitor {
    pub fn new(size: Size, title: &str) -> Self {
        Self {
            size,
            pixels: vec![EMPTY; size.area()],
            title:  title.to_string(),
            header: String::new(),
            info:   String::new(),
            frame:  String::new(),
            error:  None,
        }
    }

    /// The write error that stopped presentation, if any.
    pub fn take_error(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }

    /// Rebuild the text frame from the current buffer and headers.
    fn compose(&mut self) -> &str {
        let width = self.size.width as usize;
        let frame = &mut self.frame;
        frame.clear();

        // `write!` into a String cannot fail.
        let _ = writeln!(frame, "{:^w$}", self.title, w = width + 2);
        let _ = writeln!(frame, " {}", self.header);
        let _ = writeln!(frame, " {}\x1b[K", self.info);
        let border: String = std::iter::repeat_n(BORDER, width + 2).collect();
        let _ = writeln!(frame, "{border}");
        for row in self.pixels.chunks(width) {
            frame.push(BORDER);
            frame.extend(row);
            frame.push(BORDER);
            frame.push('\n');
        }
        let _ = writeln!(frame, "{border}");
        frame
    }

    fn present(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.compose();
        if let Err(err) = write_frame(CURSOR_HOME, &self.frame) {
            warn!(%err, "terminal write failed; no further frames will be drawn");
            self.error = Some(err);
        }
    }

    fn write_raw(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write_frame(text, "") {
            self.error = Some(err);
        }
    }
}

fn write_frame(prefix: &str, frame: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(prefix.as_bytes())?;
    out.write_all(frame.as_bytes())?;
    out.flush()
}

impl Drawer for Monitor {
    fn set_pixel(&mut self, point: Point, glyph: char) {
        debug_assert!(point.within(self.size), "pixel {point} outside {}", self.size);
        let i = self.size.cell_index(point);
        self.pixels[i] = glyph;
    }

    fn clear_pixel(&mut self, point: Point) {
        debug_assert!(point.within(self.size), "pixel {point} outside {}", self.size);
        let i = self.size.cell_index(point);
        self.pixels[i] = EMPTY;
    }
}

impl SimObserver for Monitor {
    fn on_run_start(&mut self, config: &SimConfig, obstacles: usize, threads: usize) {
        self.header = format!(
            "Config: Loop time: {}ms Thread Count: {} Obstacles: {} Algorithm: {}",
            config.tick_interval.as_millis(),
            threads,
            obstacles,
            config.algorithm,
        );
        self.write_raw(CLEAR_SCREEN);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        let n = report.entities;
        self.info = format!(
            "Info: Executing: {:04}/{n:04} Pending: {:04}/{n:04} Completed: {:04} Iter time: {:04}ms avg: {:04}ms",
            report.moving,
            report.pending,
            report.completed(),
            report.elapsed.as_millis(),
            report.average.as_millis(),
        );
        self.present();
    }

    fn on_shutdown(&mut self, _summary: &RunSummary) {
        self.write_raw(CLEAR_SCREEN);
        self.write_raw(CURSOR_HOME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_bordered_grid_under_headers() {
        let mut monitor = Monitor::new(Size::new(4, 2), "T");
        monitor.set_pixel(Point::new(0, 0), 'O');
        monitor.set_pixel(Point::new(3, 1), '#');

        let frame = monitor.compose().to_string();
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 3 + 1 + 2 + 1);
        assert_eq!(lines[0].trim(), "T");
        assert_eq!(lines[3], "++++++");
        assert_eq!(lines[4], "+O   +");
        assert_eq!(lines[5], "+   #+");
        assert_eq!(lines[6], "++++++");
    }

    #[test]
    fn cleared_pixel_is_blank() {
        let mut monitor = Monitor::new(Size::new(3, 3), "T");
        let p = Point::new(1, 2);
        monitor.set_pixel(p, '-');
        monitor.clear_pixel(p);
        assert_eq!(monitor.pixels[Size::new(3, 3).cell_index(p)], EMPTY);
    }

    #[test]
    fn run_start_fills_config_header() {
        let mut monitor = Monitor::new(Size::new(3, 3), "T");
        monitor.on_run_start(&SimConfig::new(Size::new(3, 3)), 5, 3);

        assert!(monitor.header.contains("Thread Count: 3"));
        assert!(monitor.header.contains("Obstacles: 5"));
        assert!(monitor.header.contains("Algorithm: astar"));
    }
}
