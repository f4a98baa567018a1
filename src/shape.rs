use std::rc::Rc;

use log::debug;

use crate::render::Renderer;

/// Geometry half of the bridge. Shapes hold a shared renderer and delegate
/// the draw text to it, so either side can vary independently.
pub trait Shape {
    /// Emits one draw line for the current geometry.
    fn draw(&self);

    /// Scales each dimension in place. Factors are taken as given: zero
    /// degenerates the shape, a negative factor flips sign.
    fn resize(&mut self, scale_x: f32, scale_y: f32);
}

/// Self-cloning capability. Only [`Circle`] implements it; [`Rectangle`]
/// never grew support and the gap is kept as-is.
pub trait Prototype {
    /// Returns a new, fully independent instance with the same initial state.
    fn clone_prototype(&self) -> Self;
}

/// Snapshot of a circle's radii at a point in time.
///
/// Created by [`Circle::resize_memento`], consumed by value in
/// [`Circle::restore_memento`], and otherwise held on a caller-managed LIFO
/// stack. Carries no link back to the circle it came from.
#[derive(Debug)]
pub struct CircleMemento {
    radius_x: f32,
    radius_y: f32,
}

#[derive(Clone)]
pub struct Circle {
    renderer: Rc<dyn Renderer>,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Circle {
    pub fn new(renderer: Rc<dyn Renderer>, radius_x: f32, radius_y: f32) -> Self {
        Self {
            renderer,
            radius_x,
            radius_y,
        }
    }

    /// Captures the current radii, then resizes. Handing the snapshot back to
    /// [`restore_memento`](Self::restore_memento) rewinds to the captured
    /// state no matter what happened in between.
    pub fn resize_memento(&mut self, scale_x: f32, scale_y: f32) -> CircleMemento {
        let snapshot = CircleMemento {
            radius_x: self.radius_x,
            radius_y: self.radius_y,
        };
        debug!(
            "captured circle snapshot ({}, {})",
            snapshot.radius_x, snapshot.radius_y
        );
        self.resize(scale_x, scale_y);
        snapshot
    }

    /// Overwrites both radii with the snapshot's values. Any snapshot is
    /// accepted, including one captured from a different circle.
    pub fn restore_memento(&mut self, snapshot: CircleMemento) {
        debug!(
            "restoring circle snapshot ({}, {})",
            snapshot.radius_x, snapshot.radius_y
        );
        self.radius_x = snapshot.radius_x;
        self.radius_y = snapshot.radius_y;
    }
}

impl Shape for Circle {
    fn draw(&self) {
        println!("{}", self.renderer.render_circle(self.radius_x, self.radius_y));
    }

    fn resize(&mut self, scale_x: f32, scale_y: f32) {
        self.radius_x *= scale_x;
        self.radius_y *= scale_y;
    }
}

impl Prototype for Circle {
    fn clone_prototype(&self) -> Self {
        // Radii are copied; the stateless renderer is shared with the clone.
        self.clone()
    }
}

pub struct Rectangle {
    renderer: Rc<dyn Renderer>,
    pub side_x: f32,
    pub side_y: f32,
}

impl Rectangle {
    pub fn new(renderer: Rc<dyn Renderer>, side_x: f32, side_y: f32) -> Self {
        Self {
            renderer,
            side_x,
            side_y,
        }
    }
}

impl Shape for Rectangle {
    fn draw(&self) {
        println!("{}", self.renderer.render_rect(self.side_x, self.side_y));
    }

    fn resize(&mut self, scale_x: f32, scale_y: f32) {
        self.side_x *= scale_x;
        self.side_y *= scale_y;
    }
}
