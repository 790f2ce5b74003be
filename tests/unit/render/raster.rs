use super::*;
use crate::generate::batch::generate_batch;
use crate::generate::diversify::GridLayout;
use crate::schema::preset::PresetCatalog;
use crate::synth::plan::synthesize;

fn instance() -> Instance {
    let catalog = PresetCatalog::builtin().unwrap();
    let layout = GridLayout::new(2, 2).unwrap();
    generate_batch(catalog.get("panel-drift").unwrap(), 12, &layout).remove(1)
}

fn executor(threads: usize, origin: Origin) -> RasterExecutor {
    RasterExecutor::new(RasterOpts {
        threads: Some(threads),
        origin,
    })
    .unwrap()
}

#[test]
fn zero_threads_is_rejected() {
    let err = RasterExecutor::new(RasterOpts {
        threads: Some(0),
        origin: Origin::TopLeft,
    })
    .err()
    .unwrap();
    assert!(matches!(err, ProcgenError::Validation(_)));
}

#[test]
fn thread_count_does_not_change_pixels() {
    let inst = instance();
    let res = Resolution::new(12, 9).unwrap();
    let one = executor(1, Origin::TopLeft).render(&inst, res).unwrap();
    let four = executor(4, Origin::TopLeft).render(&inst, res).unwrap();
    assert_eq!(one, four);
    assert_eq!(one.data.len(), 12 * 9 * 4);
    assert!(one.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn origins_are_vertical_mirrors() {
    let inst = instance();
    let res = Resolution::new(7, 5).unwrap();
    let top = executor(2, Origin::TopLeft).render(&inst, res).unwrap();
    let bottom = executor(2, Origin::BottomLeft).render(&inst, res).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            assert_eq!(top.pixel(x, y), bottom.pixel(x, 4 - y));
        }
    }
}

#[test]
fn pixels_match_the_synthesizer() {
    let inst = instance();
    let res = Resolution::new(6, 4).unwrap();
    let frame = executor(2, Origin::BottomLeft).render(&inst, res).unwrap();
    let [r, g, b] = synthesize([0.75, 0.375], res, inst.seed, &inst.params, &inst.palette);
    assert_eq!(frame.pixel(4, 1), [to_u8(r), to_u8(g), to_u8(b), 255]);
}

#[test]
fn batch_renders_in_order() {
    let catalog = PresetCatalog::builtin().unwrap();
    let insts = generate_batch(catalog.get("liquid-ribbons").unwrap(), 3, &GridLayout::new(3, 3).unwrap());
    let exec = executor(2, Origin::TopLeft);
    let res = Resolution::square(4).unwrap();
    let frames = exec.render_batch(&insts, res).unwrap();
    assert_eq!(frames.len(), 3);
    for (inst, frame) in insts.iter().zip(&frames) {
        assert_eq!(frame, &exec.render(inst, res).unwrap());
    }
}

#[test]
fn frame_converts_to_image() {
    let frame = executor(1, Origin::TopLeft)
        .render(&instance(), Resolution::new(3, 2).unwrap())
        .unwrap();
    let img = frame.clone().into_image().unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1).0, frame.pixel(2, 1));
}

fn solid(w: u32, h: u32, v: u8) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: [v, v, v, 255].repeat((w * h) as usize),
    }
}

#[test]
fn contact_sheet_tiles_row_major() {
    let frames: Vec<_> = (1..=5).map(|v| solid(2, 3, v * 10)).collect();
    let sheet = contact_sheet(&frames, 3).unwrap();
    assert_eq!((sheet.width, sheet.height), (6, 6));
    assert_eq!(sheet.pixel(0, 0), [10, 10, 10, 255]);
    assert_eq!(sheet.pixel(5, 2), [30, 30, 30, 255]);
    assert_eq!(sheet.pixel(1, 3), [40, 40, 40, 255]);
    assert_eq!(sheet.pixel(3, 5), [50, 50, 50, 255]);
    assert_eq!(sheet.pixel(4, 4), [0, 0, 0, 255]);
}

#[test]
fn contact_sheet_rejects_mixed_sizes_and_empty_input() {
    assert!(contact_sheet(&[], 2).is_err());
    assert!(contact_sheet(&[solid(2, 2, 1)], 0).is_err());
    assert!(contact_sheet(&[solid(2, 2, 1), solid(3, 2, 1)], 2).is_err());
    let single = contact_sheet(&[solid(2, 2, 9)], 6).unwrap();
    assert_eq!((single.width, single.height), (2, 2));
}

#[test]
fn mismatched_buffers_are_render_errors() {
    let mut short = solid(2, 2, 7);
    short.data.truncate(12);
    assert!(matches!(short.check_len(), Err(ProcgenError::Render(_))));
    assert!(matches!(
        contact_sheet(&[solid(2, 2, 1), short.clone()], 2),
        Err(ProcgenError::Render(_))
    ));
    assert!(matches!(short.into_image(), Err(ProcgenError::Render(_))));
    assert!(solid(3, 2, 1).check_len().is_ok());
}
