//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function
//--------------------------------------------------------------------

extern crate env_logger;
extern crate glyph_slicer;

use glyph_slicer::*;

fn sample_outlines() -> Vec<GlyphOutline> {
    let k = 0.5522847498 * 500.0;
    vec![
        GlyphOutline {
            code: 'A',
            advance: 1100.0,
            bounds: Rect::new(0.0, 0.0, 1000.0, 1000.0),
            events: vec![
                OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
                OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
                OutlineEvent::LineTo(Vec2::new(500.0, 1000.0)),
                OutlineEvent::End
            ]
        },
        GlyphOutline {
            code: 'O',
            advance: 1100.0,
            bounds: Rect::new(-500.0, -500.0, 1000.0, 1000.0),
            events: vec![
                OutlineEvent::MoveTo(Vec2::new(500.0, 0.0)),
                OutlineEvent::CubicTo(Vec2::new(500.0, k), Vec2::new(k, 500.0), Vec2::new(0.0, 500.0)),
                OutlineEvent::CubicTo(Vec2::new(-k, 500.0), Vec2::new(-500.0, k), Vec2::new(-500.0, 0.0)),
                OutlineEvent::CubicTo(Vec2::new(-500.0, -k), Vec2::new(-k, -500.0), Vec2::new(0.0, -500.0)),
                OutlineEvent::CubicTo(Vec2::new(k, -500.0), Vec2::new(500.0, -k), Vec2::new(500.0, 0.0)),
                OutlineEvent::End
            ]
        },
        GlyphOutline {
            code: 'D',
            advance: 1100.0,
            bounds: Rect::new(0.0, 0.0, 1000.0, 1000.0),
            events: vec![
                OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
                OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
                OutlineEvent::LineTo(Vec2::new(1000.0, 1000.0)),
                OutlineEvent::LineTo(Vec2::new(0.0, 1000.0)),
                OutlineEvent::MoveTo(Vec2::new(250.0, 250.0)),
                OutlineEvent::LineTo(Vec2::new(250.0, 750.0)),
                OutlineEvent::LineTo(Vec2::new(750.0, 750.0)),
                OutlineEvent::LineTo(Vec2::new(750.0, 250.0)),
                OutlineEvent::End
            ]
        }
    ]
}

fn main() {
    env_logger::init();

    let metrics = FontMetrics {
        units_per_em: 1000.0,
        ascender: 800.0,
        descender: -200.0,
        line_height: 1200.0
    };
    let kerning = vec![
        KernPair { a: 'A', b: 'O', kerning: -40.0 },
        KernPair { a: 'O', b: 'A', kerning: -30.0 }
    ];
    println!("em {} asc {} desc {} line {}, {} kern pairs",
        metrics.units_per_em, metrics.ascender, metrics.descender,
        metrics.line_height, kerning.len());

    for outline in sample_outlines() {
        let then = std::time::Instant::now();
        let glyph = slice_glyph(&outline);
        let now = std::time::Instant::now();

        println!("glyph '{}': {} slices in {:?}",
            glyph.code, glyph.slices.len(), now.duration_since(then));
        for slice in &glyph.slices {
            println!("  y {:>8.2} .. {:>8.2}  left {} right {}",
                slice.left.a.y, slice.left.c.y, slice.left, slice.right);
        }
    }
}
