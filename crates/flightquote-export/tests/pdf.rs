mod common;

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use common::{asset_dir, empty_assets, group, quotation};
use flightquote_export::assets::{AssetStore, ImageAsset};
use flightquote_export::canvas::{approx_text_width, fit_text, FontWeight, Rect, ELLIPSIS};
use flightquote_export::error::{AssetError, ExportError};
use flightquote_export::pdf::{generate_pdf, CONTENT_TYPE, SUGGESTED_FILENAME};
use flightquote_export::styles::{DocumentStyles, ThemeName};

#[test]
fn generates_a_pdf_without_assets() {
    let (_dir, assets) = empty_assets();
    let doc = quotation(vec![group("Emirates", 2), group("IndiGo", 30)]);
    let bytes = generate_pdf(&doc, &DocumentStyles::classic(), &assets).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(CONTENT_TYPE, "application/pdf");
    assert_eq!(SUGGESTED_FILENAME, "flight_quotation.pdf");
}

#[test]
fn generates_a_pdf_with_images() {
    let dir = asset_dir();
    let assets = AssetStore::new(dir.path());
    let doc = quotation(vec![group("Emirates", 3)]);
    for theme in [ThemeName::Classic, ThemeName::Compact] {
        let bytes = generate_pdf(&doc, &theme.styles(), &assets).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "{theme}");
    }
}

#[test]
fn oversized_cells_render_quickly() {
    let (_dir, assets) = empty_assets();
    let mut emirates = group("Emirates", 3);
    emirates.flights[0].flight_number = Some("X".repeat(200_000));
    emirates.pax_name = Some("Sara Ali ".repeat(20_000));
    let mut doc = quotation(vec![emirates]);
    doc.customer_name = Some("Gulf Trading Co ".repeat(10_000));

    let started = Instant::now();
    let bytes = generate_pdf(&doc, &DocumentStyles::classic(), &assets).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(started.elapsed() < Duration::from_secs(5), "took {:?}", started.elapsed());
}

#[test]
fn long_text_is_clipped_with_an_ellipsis() {
    let text = "X".repeat(100_000);
    let fitted = fit_text(&text, 60.0, 9.0, FontWeight::Bold);
    assert!(fitted.ends_with(ELLIPSIS));
    assert!(fitted.len() > ELLIPSIS.len());
    assert!(approx_text_width(&fitted, 9.0, FontWeight::Bold) <= 60.0);
    // One more character would have overflowed.
    let longer = format!("XX{}", &fitted[1..]);
    assert!(approx_text_width(&longer, 9.0, FontWeight::Bold) > 60.0);

    assert_eq!(fit_text("EK 851", 60.0, 9.0, FontWeight::Regular), "EK 851");
    assert_eq!(fit_text("", 0.0, 9.0, FontWeight::Regular), "");
    assert_eq!(fit_text("Emirates", 2.0, 9.0, FontWeight::Regular), "");
    assert_eq!(fit_text("\u{d7}\u{d7}\u{d7}\u{d7}", 15.0, 9.0, FontWeight::Regular), "\u{d7}...");
}

#[test]
fn images_are_embedded_once_per_asset() {
    let dir = asset_dir();
    let assets = AssetStore::new(dir.path());
    let doc = quotation(vec![group("Emirates", 40), group("Emirates", 2), group("Emirates", 1)]);
    let bytes = generate_pdf(&doc, &DocumentStyles::classic(), &assets).unwrap();

    let pdf = lopdf::Document::load_mem(&bytes).unwrap();
    let images = pdf
        .objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(lopdf::Object::as_name)
                .is_ok_and(|name| name == b"Image")
        })
        .count();
    assert_eq!(images, 3, "logo, footer band and the Emirates logo");

    let pages = pdf.get_pages();
    assert!(pages.len() >= 4);
    let mut referenced = BTreeSet::new();
    for page_id in pages.values() {
        let page = pdf.get_dictionary(*page_id).unwrap();
        let resources = match page.get(b"Resources").unwrap() {
            lopdf::Object::Reference(id) => pdf.get_dictionary(*id).unwrap(),
            object => object.as_dict().unwrap(),
        };
        let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
        for (_, target) in xobjects.iter() {
            let id = target.as_reference().unwrap();
            assert!(pdf.get_object(id).unwrap().as_stream().is_ok());
            referenced.insert(id);
        }
    }
    assert_eq!(referenced.len(), 3);
}

#[test]
fn invalid_styles_fail_generation() {
    let (_dir, assets) = empty_assets();
    let mut styles = DocumentStyles::compact();
    styles.flight_table.border_width = -1.0;
    let err = generate_pdf(&quotation(vec![group("Emirates", 1)]), &styles, &assets).unwrap_err();
    assert!(matches!(err, ExportError::Geometry(_)), "{err}");
}

#[test]
fn theme_names_parse() {
    assert_eq!("classic".parse::<ThemeName>().unwrap(), ThemeName::Classic);
    assert_eq!(" Compact ".parse::<ThemeName>().unwrap(), ThemeName::Compact);
    assert_eq!(ThemeName::default(), ThemeName::Classic);
    assert_eq!(ThemeName::Compact.to_string(), "compact");
    assert_eq!(ThemeName::Compact.styles().theme, ThemeName::Compact);

    let err = "neon".parse::<ThemeName>().unwrap_err();
    assert!(matches!(err, ExportError::UnknownTheme(name) if name == "neon"));
}

#[test]
fn themes_share_the_page_geometry() {
    let classic = DocumentStyles::classic();
    let compact = DocumentStyles::compact();
    assert_eq!(classic.page, compact.page);
    let width = classic.content_width(612.0);
    assert!(classic.flight_columns.iter().sum::<f32>() <= width);
    assert!(compact.flight_columns.iter().sum::<f32>() <= width);
}

#[test]
fn transparent_pixels_flatten_onto_white() {
    let mut png = Vec::new();
    image::RgbaImage::from_pixel(2, 1, image::Rgba([0, 0, 0, 0]))
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let asset = ImageAsset::decode("clear.png", &png).unwrap();
    assert_eq!((asset.width, asset.height), (2, 1));
    assert_eq!(asset.rgb, vec![255; 6]);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = ImageAsset::decode("logo.png", b"nope").unwrap_err();
    assert!(matches!(err, AssetError::Decode { .. }));
}

#[test]
fn images_fit_inside_their_slot() {
    let asset = ImageAsset {
        name: "wide.png".to_string(),
        width: 300,
        height: 100,
        rgb: vec![0; 300 * 100 * 3],
    };
    let frame = asset.fit_within(Rect::new(10.0, 20.0, 60.0, 40.0));
    assert_eq!(frame, Rect::new(10.0, 30.0, 60.0, 20.0));

    let frame = asset.fit_within(Rect::new(0.0, 0.0, 300.0, 50.0));
    assert_eq!(frame, Rect::new(75.0, 0.0, 150.0, 50.0));
}

#[test]
fn missing_files_are_io_errors() {
    let (_dir, assets) = empty_assets();
    let err = assets.load(&assets.logo_path()).unwrap_err();
    assert!(matches!(err, AssetError::Io { .. }));
    assert!(assets.airline_logo_path("Unknown Air").is_none());
    assert!(assets
        .airline_logo_path("Qatar Airways")
        .unwrap()
        .ends_with("airline-logos/qatar-airways.png"));
}
