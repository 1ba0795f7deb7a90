//! Paints a scene onto a drawing surface.
//!
//! Paint order is back to front:
//! 1. Clear and vertical gradient
//! 2. Waves in creation order, so later bands stack over earlier ones
//! 3. Particles in array order

use super::particles::Particle;
use super::state::Scene;
use super::surface::Surface;
use super::theme::BackgroundStyle;
use super::waves::Wave;

/// Renders the complete scene to the surface.
pub fn render(scene: &Scene, surface: &mut impl Surface) {
	surface.clear();
	draw_background(surface, &scene.theme.background);

	for wave in &scene.waves.waves {
		draw_wave(wave, surface);
	}

	for p in &scene.particles.particles {
		draw_particle(p, surface);
	}
}

fn draw_background(surface: &mut impl Surface, style: &BackgroundStyle) {
	surface.fill_vertical_gradient(&style.top.to_css(), &style.bottom.to_css());
}

/// Smooth curve through the control points, closed down to the bottom edge.
///
/// Each segment uses the current point as the quadratic control and the
/// midpoint to the next point as the end. The last segment collapses onto the
/// final point.
pub fn draw_wave(wave: &Wave, surface: &mut impl Surface) {
	let (Some(first), Some(last)) = (wave.points.first(), wave.points.last()) else {
		return;
	};
	let (width, height) = surface.size();

	surface.begin_path();
	surface.move_to(first.x, first.y);

	for pair in wave.points.windows(2) {
		let (point, next) = (&pair[0], &pair[1]);
		let (xc, yc) = ((point.x + next.x) / 2.0, (point.y + next.y) / 2.0);
		surface.quadratic_curve_to(point.x, point.y, xc, yc);
	}
	surface.quadratic_curve_to(last.x, last.y, last.x, last.y);

	surface.line_to(width + wave.overhang, height);
	surface.line_to(-wave.overhang, height);
	surface.close_path();
	surface.fill(&wave.fill_style());
}

pub fn draw_particle(particle: &Particle, surface: &mut impl Surface) {
	surface.begin_path();
	surface.circle(particle.x, particle.y, particle.size);
	surface.fill(&particle.color.to_css());
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::animated_background::random::rng_from_seed;
	use crate::components::animated_background::testing::{DrawOp, RecordingSurface};
	use crate::components::animated_background::theme::{Color, Theme};
	use crate::components::animated_background::waves::ControlPoint;

	fn scene() -> Scene {
		Scene::init(Theme::default(), 800.0, 600.0, &mut rng_from_seed(Some(11)))
	}

	#[test]
	fn frame_starts_with_clear_and_gradient() {
		let mut surface = RecordingSurface::new(800.0, 600.0);
		render(&scene(), &mut surface);

		assert_eq!(surface.ops[0], DrawOp::Clear);
		assert_eq!(
			surface.ops[1],
			DrawOp::Gradient {
				top: "#000000".into(),
				bottom: "#0a0a0a".into(),
			}
		);
	}

	#[test]
	fn last_wave_fill_precedes_particles() {
		let scene = scene();
		let mut surface = RecordingSurface::new(800.0, 600.0);
		render(&scene, &mut surface);

		let first_circle = surface
			.ops
			.iter()
			.position(|op| matches!(op, DrawOp::Circle { .. }))
			.unwrap();
		let wave_fills: Vec<&str> = surface.ops[..first_circle]
			.iter()
			.filter_map(|op| match op {
				DrawOp::Fill(style) => Some(style.as_str()),
				_ => None,
			})
			.collect();

		assert_eq!(
			wave_fills,
			vec![
				"rgba(213, 70, 237, 0.05)",
				"rgba(139, 92, 246, 0.03)",
				"rgba(20, 241, 149, 0.04)",
				"rgba(255, 77, 157, 0.02)",
			]
		);
		// the op right before the first particle's path is the 4th wave's fill
		assert_eq!(
			surface.ops[first_circle - 2],
			DrawOp::Fill("rgba(255, 77, 157, 0.02)".into())
		);
		assert_eq!(surface.fills().count(), 4 + scene.particles.len());
	}

	#[test]
	fn wave_path_uses_midpoints_and_degenerate_tail() {
		let mut wave = scene().waves.waves[0].clone();
		wave.points = vec![
			ControlPoint {
				x: 0.0,
				y: 10.0,
				origin_y: 10.0,
			},
			ControlPoint {
				x: 100.0,
				y: 30.0,
				origin_y: 30.0,
			},
			ControlPoint {
				x: 200.0,
				y: 20.0,
				origin_y: 20.0,
			},
		];
		let mut surface = RecordingSurface::new(100.0, 50.0);
		draw_wave(&wave, &mut surface);

		assert_eq!(
			surface.ops,
			vec![
				DrawOp::BeginPath,
				DrawOp::MoveTo(0.0, 10.0),
				DrawOp::Quadratic(0.0, 10.0, 50.0, 20.0),
				DrawOp::Quadratic(100.0, 30.0, 150.0, 25.0),
				DrawOp::Quadratic(200.0, 20.0, 200.0, 20.0),
				DrawOp::LineTo(200.0, 50.0),
				DrawOp::LineTo(-100.0, 50.0),
				DrawOp::ClosePath,
				DrawOp::Fill("rgba(213, 70, 237, 0.05)".into()),
			]
		);
	}

	#[test]
	fn particle_is_filled_circle() {
		let p = Particle {
			x: 12.0,
			y: 34.0,
			vx: 0.0,
			vy: 0.0,
			size: 1.5,
			color: Color::rgba(20, 241, 149, 0.7),
		};
		let mut surface = RecordingSurface::new(100.0, 100.0);
		draw_particle(&p, &mut surface);

		assert_eq!(
			surface.ops,
			vec![
				DrawOp::BeginPath,
				DrawOp::Circle {
					x: 12.0,
					y: 34.0,
					radius: 1.5,
				},
				DrawOp::Fill("rgba(20, 241, 149, 0.7)".into()),
			]
		);
	}
}
