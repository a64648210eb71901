use std::cell::Cell;

use flightquote_export::assets::{AssetStore, ImageCache};
use flightquote_export::canvas::{Canvas, DrawOp, Fill, RecordingCanvas};
use flightquote_export::error::ExportError;
use flightquote_export::flow::{LayoutCursor, PageChrome, PageFlow};
use flightquote_export::styles::DocumentStyles;
use flightquote_export::table::{draw_table, TableSpec};

const BODY_TOP: f32 = 100.0;

#[derive(Default)]
struct CountingChrome {
    headers: Cell<usize>,
    footers: Cell<usize>,
}

impl PageChrome for CountingChrome {
    fn render_header(&self, _canvas: &mut dyn Canvas) -> Result<f32, ExportError> {
        self.headers.set(self.headers.get() + 1);
        Ok(BODY_TOP)
    }

    fn render_footer(&self, _canvas: &mut dyn Canvas) -> Result<(), ExportError> {
        self.footers.set(self.footers.get() + 1);
        Ok(())
    }
}

#[test]
fn chrome_runs_once_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let assets = AssetStore::new(dir.path());
    let images = ImageCache::new(&assets);
    let styles = DocumentStyles::classic();
    let chrome = CountingChrome::default();
    let mut canvas = RecordingCanvas::default();

    let mut flow = PageFlow::new(&mut canvas, &chrome, &styles, &images);
    let mut cursor = flow.start().unwrap();
    assert_eq!(cursor, LayoutCursor { page_index: 0, y: BODY_TOP });

    for _ in 0..3 {
        cursor = flow.break_page(cursor).unwrap();
    }
    assert_eq!(cursor.page_index, 3);
    let summary = flow.finish(cursor).unwrap();

    assert_eq!(summary.pages, 4);
    assert_eq!(summary.page_breaks, 3);
    assert_eq!(chrome.headers.get(), 4);
    assert_eq!(chrome.footers.get(), 4);
}

#[test]
fn ensure_room_breaks_only_when_needed() {
    let dir = tempfile::tempdir().unwrap();
    let assets = AssetStore::new(dir.path());
    let images = ImageCache::new(&assets);
    let styles = DocumentStyles::classic();
    let chrome = CountingChrome::default();
    let mut canvas = RecordingCanvas::default();

    let mut flow = PageFlow::new(&mut canvas, &chrome, &styles, &images);
    let start = flow.start().unwrap();
    let limit = flow.bottom_limit();

    let same = flow.ensure_room(start, limit - BODY_TOP).unwrap();
    assert_eq!(same, start);

    let low = start.advance(limit - BODY_TOP - 10.0);
    let moved = flow.ensure_room(low, 20.0).unwrap();
    assert_eq!(moved, LayoutCursor { page_index: 1, y: BODY_TOP });

    let err = flow.ensure_room(moved, limit).unwrap_err();
    assert!(matches!(err, ExportError::Layout(_)));
}

#[test]
fn stale_cursor_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let assets = AssetStore::new(dir.path());
    let images = ImageCache::new(&assets);
    let styles = DocumentStyles::classic();
    let chrome = CountingChrome::default();
    let mut canvas = RecordingCanvas::default();

    let mut flow = PageFlow::new(&mut canvas, &chrome, &styles, &images);
    let first = flow.start().unwrap();
    flow.break_page(first).unwrap();

    let err = flow.ensure_room(first, 10.0).unwrap_err();
    assert!(matches!(err, ExportError::Layout(_)));
}

#[test]
fn table_rows_must_match_columns() {
    let dir = tempfile::tempdir().unwrap();
    let assets = AssetStore::new(dir.path());
    let images = ImageCache::new(&assets);
    let styles = DocumentStyles::classic();
    let chrome = CountingChrome::default();
    let mut canvas = RecordingCanvas::default();

    let mut flow = PageFlow::new(&mut canvas, &chrome, &styles, &images);
    let cursor = flow.start().unwrap();
    let spec = TableSpec::new(["A", "B"], vec![100.0, 100.0])
        .with_rows(vec![vec!["1".to_string()]]);

    let err = draw_table(&mut flow, &spec, &styles.fare_table, 40.0, cursor).unwrap_err();
    assert!(matches!(err, ExportError::Layout(_)));
}

#[test]
fn highlighted_rows_use_the_highlight_fill() {
    let dir = tempfile::tempdir().unwrap();
    let assets = AssetStore::new(dir.path());
    let images = ImageCache::new(&assets);
    let styles = DocumentStyles::classic();
    let chrome = CountingChrome::default();
    let mut canvas = RecordingCanvas::default();

    {
        let mut flow = PageFlow::new(&mut canvas, &chrome, &styles, &images);
        let cursor = flow.start().unwrap();
        let spec = TableSpec::new(["Item"], vec![200.0])
            .with_rows(vec![vec!["a".to_string()], vec!["b".to_string()]])
            .with_highlight(vec![false, true]);
        let end = draw_table(&mut flow, &spec, &styles.flight_table, 40.0, cursor).unwrap();
        let layout = &styles.flight_table;
        assert_eq!(end.y, BODY_TOP + layout.header_height + layout.row_height * 2.0);
        flow.finish(end).unwrap();
    }

    let fills: Vec<_> = canvas
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { rect, style } if rect.height == styles.flight_table.row_height => {
                Some(style.fill)
            }
            _ => None,
        })
        .collect();
    let colors = &styles.flight_table.colors;
    assert_eq!(
        fills,
        [
            Fill::Solid(colors.stripes[0]),
            Fill::Solid(colors.highlight_fill),
        ]
    );
}
