//! Dispatcher tests

use pretty_assertions::assert_eq;
use shape_dispatch::*;
use std::io;
use std::sync::{Arc, Mutex};

/// An operation that records which implementation ran, in call order.
fn recording(calls: &Arc<Mutex<Vec<ShapeKind>>>) -> Operation {
    let on_circle = Arc::clone(calls);
    let on_square = Arc::clone(calls);
    let on_rectangle = Arc::clone(calls);

    Operation::builder("record")
        .circle(move |_, _| {
            on_circle.lock().unwrap().push(ShapeKind::Circle);
            Ok(Outcome::Unit)
        })
        .square(move |_, _| {
            on_square.lock().unwrap().push(ShapeKind::Square);
            Ok(Outcome::Unit)
        })
        .rectangle(move |_, _| {
            on_rectangle.lock().unwrap().push(ShapeKind::Rectangle);
            Ok(Outcome::Unit)
        })
        .build()
}

fn circle_and_square() -> Vec<Shape> {
    vec![Shape::circle(1.0).unwrap(), Shape::square(2.0).unwrap()]
}

#[test]
fn test_draw_invokes_each_implementation_once_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut registry = OperationRegistry::new();
    registry.register(recording(&calls)).unwrap();

    let outcomes = Dispatcher::new(&registry)
        .dispatch("record", &circle_and_square(), &mut NullSink)
        .unwrap();

    assert_eq!(outcomes, vec![Outcome::Unit, Outcome::Unit]);
    assert_eq!(
        *calls.lock().unwrap(),
        vec![ShapeKind::Circle, ShapeKind::Square]
    );
}

#[test]
fn test_standard_draw_emits_lines_in_order() {
    let registry = OperationRegistry::with_standard_operations(&StandardParams::default());
    let mut lines: Vec<String> = Vec::new();

    dispatch(&registry, "draw", &circle_and_square(), &mut lines).unwrap();

    assert_eq!(
        lines,
        vec![
            "circle r=1 at (0, 0)".to_string(),
            "square side=2 angle=0rad at (0, 0)".to_string(),
        ]
    );
}

#[test]
fn test_empty_collection_performs_no_invocations() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut registry = OperationRegistry::new();
    registry.register(recording(&calls)).unwrap();

    let outcomes = Dispatcher::new(&registry)
        .dispatch("record", &[], &mut NullSink)
        .unwrap();

    assert!(outcomes.is_empty());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_dispatch_fails_fast_on_first_error() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let on_circle = Arc::clone(&calls);
    let op = Operation::builder("circles_only")
        .circle(move |_, _| {
            on_circle.lock().unwrap().push(ShapeKind::Circle);
            Ok(Outcome::Unit)
        })
        .build();

    let shapes = vec![
        Shape::circle(1.0).unwrap(),
        Shape::square(1.0).unwrap(),
        Shape::circle(2.0).unwrap(),
    ];
    let registry = OperationRegistry::new();
    let err = Dispatcher::new(&registry)
        .dispatch_operation(&op, &shapes, &mut NullSink)
        .unwrap_err();

    assert!(matches!(
        err,
        ShapeError::UnsupportedKind {
            kind: ShapeKind::Square,
            ..
        }
    ));
    // The third shape is never reached
    assert_eq!(*calls.lock().unwrap(), vec![ShapeKind::Circle]);
}

#[test]
fn test_unknown_operation_touches_nothing() {
    let registry = OperationRegistry::new();
    let mut lines: Vec<String> = Vec::new();
    let err = dispatch(&registry, "draw", &circle_and_square(), &mut lines).unwrap_err();

    assert!(matches!(err, ShapeError::UnknownOperation { .. }));
    assert!(lines.is_empty());
}

#[test]
fn test_interrupt_stops_before_first_element() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut registry = OperationRegistry::new();
    registry.register(recording(&calls)).unwrap();

    let ctx = DispatchContext::new();
    ctx.interrupt();
    let dispatcher = Dispatcher::with_context(&registry, ctx.clone());

    let err = dispatcher
        .dispatch("record", &circle_and_square(), &mut NullSink)
        .unwrap_err();
    assert!(matches!(err, ShapeError::Interrupted));
    assert!(calls.lock().unwrap().is_empty());

    ctx.reset_interrupt();
    assert!(!dispatcher.context().is_interrupted());
    dispatcher
        .dispatch("record", &circle_and_square(), &mut NullSink)
        .unwrap();
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[test]
fn test_rotate_over_collection_returns_new_shapes() {
    let params = StandardParams {
        rotation: Angle::degrees(30.0),
        ..Default::default()
    };
    let registry = OperationRegistry::with_standard_operations(&params);
    let shapes: ShapeCollection = circle_and_square().into();

    let outcomes = Dispatcher::with_context(&registry, DispatchContext::with_trace(true))
        .dispatch("rotate", shapes.as_slice(), &mut NullSink)
        .unwrap();

    let rotated: Vec<Shape> = outcomes
        .iter()
        .map(|o| *o.as_shape().unwrap())
        .collect();
    assert_eq!(rotated[0], shapes.as_slice()[0]);
    assert!(rotated[1]
        .orientation()
        .approx_eq(Angle::degrees(30.0), 1e-12));
}

/// A writer that refuses every write.
struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_draw_into_failing_writer_reports_sink_error() {
    let registry = OperationRegistry::with_standard_operations(&StandardParams::default());
    let mut sink = WriterSink::new(BrokenPipe);

    let err = dispatch(&registry, "draw", &circle_and_square(), &mut sink).unwrap_err();

    match err {
        ShapeError::Sink(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected Sink, got {:?}", other),
    }
}

#[test]
fn test_interrupt_raised_mid_dispatch_stops_next_element() {
    let ctx = DispatchContext::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let on_circle = Arc::clone(&calls);
    let on_square = Arc::clone(&calls);
    let stop = ctx.clone();
    let op = Operation::builder("stop_after_first")
        .circle(move |_, _| {
            on_circle.lock().unwrap().push(ShapeKind::Circle);
            stop.interrupt();
            Ok(Outcome::Unit)
        })
        .square(move |_, _| {
            on_square.lock().unwrap().push(ShapeKind::Square);
            Ok(Outcome::Unit)
        })
        .build();

    let registry = OperationRegistry::new();
    let err = Dispatcher::with_context(&registry, ctx)
        .dispatch_operation(&op, &circle_and_square(), &mut NullSink)
        .unwrap_err();

    assert!(matches!(err, ShapeError::Interrupted));
    assert_eq!(*calls.lock().unwrap(), vec![ShapeKind::Circle]);
}
