// Scripted walkthrough of the shape-drawing patterns: bridged renderers,
// reversible resize commands on an undo stack, circle mementos, prototype
// cloning, and the shared registry.

use std::cell::RefCell;
use std::env;
use std::process;
use std::rc::Rc;

use colored::Colorize;

use shape_patterns::{
    Circle, Command, DemoRegistry, Prototype, Rectangle, RendererKind, ResizeShapeCommand, Shape,
};

/// Renderer style for the demo circle, from the optional first argument.
/// Defaults to raster, which is the classic version of the script.
fn demo_renderer_kind() -> RendererKind {
    match env::args().nth(1) {
        None => RendererKind::Raster,
        Some(arg) => match arg.parse() {
            Ok(kind) => kind,
            Err(err) => {
                eprintln!("{} {}", "error:".red(), err);
                process::exit(2);
            }
        },
    }
}

fn main() {
    env_logger::init();

    let mut registry = DemoRegistry::new();

    // ========================================================================
    // Bridge: same shapes, interchangeable renderers
    // ========================================================================

    let circle = Rc::new(RefCell::new(Circle::new(
        demo_renderer_kind().create(),
        5.0,
        5.0,
    )));
    circle.borrow().draw();

    let rect = Rc::new(RefCell::new(Rectangle::new(
        RendererKind::Vector.create(),
        10.0,
        5.0,
    )));
    rect.borrow().draw();

    rect.borrow_mut().resize(2.0, 5.0);
    rect.borrow().draw();

    // ========================================================================
    // Command: a single resize, applied and reversed
    // ========================================================================

    let resize_circle: Box<dyn Command> =
        Box::new(ResizeShapeCommand::new(circle.clone(), 4.0, 4.0));
    resize_circle.call();
    circle.borrow().draw();
    resize_circle.undo();
    circle.borrow().draw();

    // ========================================================================
    // Command stack: apply in order, undo in strict reverse order
    // ========================================================================

    let mut commands: Vec<Box<dyn Command>> = Vec::new();
    commands.push(Box::new(ResizeShapeCommand::new(rect.clone(), 10.0, 5.0)));
    commands.push(Box::new(ResizeShapeCommand::new(circle.clone(), 5.0, 5.0)));
    commands.push(Box::new(ResizeShapeCommand::new(circle.clone(), 10.0, 1.0)));
    commands.push(Box::new(ResizeShapeCommand::new(rect.clone(), 1.0, 20.0)));

    for command in &commands {
        println!("==========");
        command.call();
        circle.borrow().draw();
        rect.borrow().draw();
    }

    println!("== UNDO ==");
    while let Some(command) = commands.pop() {
        println!("==========");
        command.undo();
        circle.borrow().draw();
        rect.borrow().draw();
    }

    // ========================================================================
    // Memento: snapshot stack fully unwound rewinds the circle
    // ========================================================================

    println!("== Memento ==");
    let mut mementos = Vec::new();
    mementos.push(circle.borrow_mut().resize_memento(10.0, 20.0));
    circle.borrow().draw();
    mementos.push(circle.borrow_mut().resize_memento(20.0, 20.0));
    circle.borrow().draw();
    mementos.push(circle.borrow_mut().resize_memento(10.0, 10.0));

    while let Some(snapshot) = mementos.pop() {
        circle.borrow_mut().restore_memento(snapshot);
    }
    circle.borrow().draw();

    // ========================================================================
    // Prototype: the clone lives its own life
    // ========================================================================

    println!("== Prototype ==");
    let cloned = circle.borrow().clone_prototype();
    circle.borrow().draw();
    cloned.draw();
    circle.borrow_mut().resize(20.0, 20.0);
    circle.borrow().draw();
    cloned.draw();

    // ========================================================================
    // Registry: park a fresh clone and the first command for later
    // ========================================================================

    registry.install_circle(Rc::new(RefCell::new(circle.borrow().clone_prototype())));
    registry.push_command(resize_circle);
}
