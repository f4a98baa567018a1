use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::shape::Shape;

/// A reversible operation captured as a value.
///
/// The undo log is an explicit caller-owned stack of boxed commands: push to
/// apply in sequence, pop-and-undo to reverse in exactly the opposite order.
/// The stack provides the ordering guarantee; the command itself is stateless
/// beyond its captured parameters.
pub trait Command {
    fn call(&self);

    /// Applies the inverse of `call`. Not idempotent: undoing without a
    /// matching prior call still applies the inverse.
    fn undo(&self);
}

/// Scales a shape by a fixed factor pair; undo scales by the reciprocals.
///
/// The target shape is shared, not owned, so the command stays valid for as
/// long as anyone holds the shape. With float factors the reciprocal is only
/// an exact inverse over the reals; repeated call/undo cycles accumulate
/// rounding error, and a zero factor makes the reciprocal infinite (see the
/// tests). Neither case is guarded.
pub struct ResizeShapeCommand {
    shape: Rc<RefCell<dyn Shape>>,
    scale_x: f32,
    scale_y: f32,
}

impl ResizeShapeCommand {
    pub fn new(shape: Rc<RefCell<dyn Shape>>, scale_x: f32, scale_y: f32) -> Self {
        Self {
            shape,
            scale_x,
            scale_y,
        }
    }
}

impl Command for ResizeShapeCommand {
    fn call(&self) {
        debug!("resize by ({}, {})", self.scale_x, self.scale_y);
        self.shape.borrow_mut().resize(self.scale_x, self.scale_y);
    }

    fn undo(&self) {
        debug!("resize back by (1/{}, 1/{})", self.scale_x, self.scale_y);
        self.shape
            .borrow_mut()
            .resize(1.0 / self.scale_x, 1.0 / self.scale_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::VectorRenderer;
    use crate::shape::{Circle, Rectangle};

    const EPS: f32 = 1e-4;

    fn shared_circle(radius: f32) -> Rc<RefCell<Circle>> {
        Rc::new(RefCell::new(Circle::new(
            Rc::new(VectorRenderer),
            radius,
            radius,
        )))
    }

    #[test]
    fn test_call_then_undo_round_trips() {
        let circle = shared_circle(5.0);
        let command = ResizeShapeCommand::new(circle.clone(), 4.0, 4.0);

        command.call();
        assert!((circle.borrow().radius_x - 20.0).abs() < EPS);
        assert!((circle.borrow().radius_y - 20.0).abs() < EPS);

        command.undo();
        assert!((circle.borrow().radius_x - 5.0).abs() < EPS);
        assert!((circle.borrow().radius_y - 5.0).abs() < EPS);
    }

    #[test]
    fn test_stack_undoes_in_reverse_order() {
        let circle = shared_circle(1.0);
        let mut stack: Vec<Box<dyn Command>> = vec![
            Box::new(ResizeShapeCommand::new(circle.clone(), 2.0, 2.0)),
            Box::new(ResizeShapeCommand::new(circle.clone(), 3.0, 3.0)),
            Box::new(ResizeShapeCommand::new(circle.clone(), 5.0, 5.0)),
        ];

        for command in &stack {
            command.call();
        }
        assert!((circle.borrow().radius_x - 30.0).abs() < EPS);

        // The x5 command went on last, so it must come off first.
        stack.pop().unwrap().undo();
        assert!((circle.borrow().radius_x - 6.0).abs() < EPS);

        stack.pop().unwrap().undo();
        assert!((circle.borrow().radius_x - 2.0).abs() < EPS);

        stack.pop().unwrap().undo();
        assert!((circle.borrow().radius_x - 1.0).abs() < EPS);
    }

    #[test]
    fn test_undo_without_call_still_scales() {
        let circle = shared_circle(8.0);
        let command = ResizeShapeCommand::new(circle.clone(), 2.0, 2.0);

        command.undo();
        assert!((circle.borrow().radius_x - 4.0).abs() < EPS);
        assert!((circle.borrow().radius_y - 4.0).abs() < EPS);
    }

    #[test]
    fn test_zero_scale_undo_without_call_is_infinite() {
        let rect = Rc::new(RefCell::new(Rectangle::new(
            Rc::new(VectorRenderer),
            4.0,
            4.0,
        )));
        let command = ResizeShapeCommand::new(rect.clone(), 0.0, 2.0);

        // 4 * (1/0) is positive infinity.
        command.undo();
        assert!(rect.borrow().side_x.is_infinite());
        assert!((rect.borrow().side_y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_zero_scale_call_then_undo_is_nan() {
        let rect = Rc::new(RefCell::new(Rectangle::new(
            Rc::new(VectorRenderer),
            4.0,
            4.0,
        )));
        let command = ResizeShapeCommand::new(rect.clone(), 0.0, 2.0);

        command.call();
        assert_eq!(rect.borrow().side_x, 0.0);
        assert!((rect.borrow().side_y - 8.0).abs() < EPS);

        // 0 * (1/0) is NaN; the invalid value just propagates into later
        // geometry instead of halting anything.
        command.undo();
        assert!(rect.borrow().side_x.is_nan());
        assert!((rect.borrow().side_y - 4.0).abs() < EPS);
    }
}
