/*
 * Dot Field Animation
 *
 * Animates a set of dots bouncing inside a bordered canvas, drawing
 * connection lines between dots that come within a distance threshold.
 * Lines fade out as the dots drift apart. A control panel adjusts the
 * animation parameters in real time.
 */

use dotfield::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
