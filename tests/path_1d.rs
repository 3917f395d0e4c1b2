use contour_measure::*;

fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> Path {
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    pb.line_to(x1, y1);
    pb.finish().unwrap()
}

#[test]
fn translate() {
    init_logger();

    let effect = Path1DEffect::new(line(0.0, 0.0, 1.0, 0.0), 2.0, 0.0, StampStyle::Translate).unwrap();
    let path = effect.apply(&line(0.0, 0.0, 8.0, 0.0), 1.0).unwrap();

    assert_eq!(
        path.verbs(),
        &[
            PathVerb::Move,
            PathVerb::Line,
            PathVerb::Move,
            PathVerb::Line,
            PathVerb::Move,
            PathVerb::Line,
            PathVerb::Move,
            PathVerb::Line,
        ]
    );
    assert_eq!(path.points()[2], Point::from_xy(2.0, 0.0));
    assert_eq!(path.points()[7], Point::from_xy(7.0, 0.0));
}

#[test]
fn rotate() {
    init_logger();

    let effect = Path1DEffect::new(line(0.0, 0.0, 1.0, 0.0), 4.0, 0.0, StampStyle::Rotate).unwrap();
    let path = effect.apply(&line(0.0, 0.0, 0.0, 8.0), 1.0).unwrap();

    assert_eq!(
        path.points(),
        &[
            Point::from_xy(0.0, 0.0),
            Point::from_xy(0.0, 1.0),
            Point::from_xy(0.0, 4.0),
            Point::from_xy(0.0, 5.0),
        ]
    );
}

#[test]
fn morph() {
    init_logger();

    let effect = Path1DEffect::new(line(0.0, 0.0, 2.0, 0.0), 4.0, 0.0, StampStyle::Morph).unwrap();
    let path = effect.apply(&line(0.0, 0.0, 8.0, 0.0), 1.0).unwrap();

    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        &[
            PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
            PathSegment::QuadTo(Point::from_xy(1.0, 0.0), Point::from_xy(2.0, 0.0)),
            PathSegment::MoveTo(Point::from_xy(4.0, 0.0)),
            PathSegment::QuadTo(Point::from_xy(5.0, 0.0), Point::from_xy(6.0, 0.0)),
        ]
    );
}

#[test]
fn morph_bends_around_corners() {
    init_logger();

    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(4.0, 0.0);
    pb.line_to(4.0, 4.0);
    let path = pb.finish().unwrap();

    // A stamp that is longer than the advance covers the corner.
    let effect = Path1DEffect::new(line(0.0, 0.0, 6.0, 0.0), 8.0, 0.0, StampStyle::Morph).unwrap();
    let stamped = effect.apply(&path, 1.0).unwrap();

    assert_eq!(
        stamped.segments().collect::<Vec<_>>(),
        &[
            PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
            PathSegment::QuadTo(Point::from_xy(3.0, 0.0), Point::from_xy(4.0, 2.0)),
        ]
    );
}

#[test]
fn phase() {
    init_logger();

    let effect = Path1DEffect::new(line(0.0, 0.0, 1.0, 0.0), 4.0, 1.0, StampStyle::Translate).unwrap();
    assert_eq!(effect.initial_offset(), 3.0);

    let path = effect.apply(&line(0.0, 0.0, 8.0, 0.0), 1.0).unwrap();
    assert_eq!(
        path.points(),
        &[
            Point::from_xy(3.0, 0.0),
            Point::from_xy(4.0, 0.0),
            Point::from_xy(7.0, 0.0),
            Point::from_xy(8.0, 0.0),
        ]
    );

    let effect = Path1DEffect::new(line(0.0, 0.0, 1.0, 0.0), 4.0, -1.0, StampStyle::Translate).unwrap();
    assert_eq!(effect.initial_offset(), 1.0);
}

#[test]
fn every_contour() {
    init_logger();

    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(4.0, 0.0);
    pb.move_to(0.0, 10.0);
    pb.line_to(4.0, 10.0);
    let path = pb.finish().unwrap();

    let effect = Path1DEffect::new(line(0.0, 0.0, 1.0, 0.0), 4.0, 0.0, StampStyle::Translate).unwrap();
    let stamped = effect.apply(&path, 1.0).unwrap();
    assert_eq!(
        stamped.points(),
        &[
            Point::from_xy(0.0, 0.0),
            Point::from_xy(1.0, 0.0),
            Point::from_xy(0.0, 10.0),
            Point::from_xy(1.0, 10.0),
        ]
    );
}

#[test]
fn nothing_to_stamp() {
    init_logger();

    let mut pb = PathBuilder::new();
    pb.move_to(1.0, 1.0);
    pb.close();
    let path = pb.finish().unwrap();

    let effect = Path1DEffect::new(line(0.0, 0.0, 1.0, 0.0), 4.0, 0.0, StampStyle::Translate).unwrap();
    assert!(effect.apply(&path, 1.0).is_none());
}

#[test]
fn too_many_stamps() {
    init_logger();

    let effect = Path1DEffect::new(line(0.0, 0.0, 1.0, 0.0), 1.0, 0.0, StampStyle::Translate).unwrap();
    assert!(effect.apply(&line(0.0, 0.0, 200000.0, 0.0), 1.0).is_none());
}
