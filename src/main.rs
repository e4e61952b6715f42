//! Headless demo scene for the kinematics kernel.
//!
//! A ship thrusts and turns through a field with a drifting asteroid and a
//! wall; collisions and evictions are logged.
use std::path::PathBuf;

use anyhow::{Context, Result};
use banana::prelude::*;
use banana::{init_logging, random_heading, Tuning};
use clap::Parser;
use log::info;
use serde::Serialize;

/// Headless demo of the Banana kinematics kernel
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 120)]
    ticks: u32,
    /// JSON file overriding damping and rest thresholds
    #[arg(long)]
    tuning: Option<PathBuf>,
}

const SHIP_MAX_SPEED: f64 = 4.0;
const SHIP_THRUST: f64 = 0.2;
const SHIP_MAX_TURN: f64 = 0.05;
const SHIP_TURN_FORCE: f64 = 0.01;

enum Actor {
    Ship(Body),
    Asteroid(Body),
    Wall(Body),
}

impl Behaviour for Actor {
    fn body(&self) -> &Body {
        match self {
            Self::Ship(body) | Self::Asteroid(body) | Self::Wall(body) => body,
        }
    }

    fn body_mut(&mut self) -> &mut Body {
        match self {
            Self::Ship(body) | Self::Asteroid(body) | Self::Wall(body) => body,
        }
    }

    fn update(&mut self) -> Result<(), InvalidArgument> {
        match self {
            Self::Ship(body) => {
                body.turn_toward(Turn::CounterClockwise, SHIP_MAX_TURN, SHIP_TURN_FORCE)?;
                body.move_forward_capped(SHIP_THRUST, SHIP_MAX_SPEED)?;
                body.apply_rotational_damping();
                body.advance_one_tick();
            }
            Self::Asteroid(body) => {
                body.advance_one_tick();
                body.apply_velocity_damping();
            }
            Self::Wall(_) => {}
        }
        Ok(())
    }

    fn handle_collision(&mut self, other: &Self, hit: &CollisionResult) {
        match (self, other) {
            (Self::Ship(body), Self::Wall(_)) => {
                info!("ship bounced off wall at {:?}", body.center());
                body.revert_to_last_valid();
                body.set_velocity(0.0, 0.0);
            }
            (Self::Ship(body), Self::Asteroid(_)) => {
                info!("ship destroyed (dx {:.1}, dy {:.1})", hit.x_distance, hit.y_distance);
                body.respawn();
            }
            (Self::Asteroid(body), Self::Ship(_)) => body.mark_done(),
            _ => {}
        }
    }

    fn on_done(&mut self) {
        info!("{} finished at {:?}", self.body().tag(), self.body().center());
    }
}

#[derive(Serialize)]
struct Report {
    tag: EntityTag,
    center: (f64, f64),
    speed: f64,
    rotation: f64,
}

fn spawn_scene(registry: &mut Registry<Actor>, tuning: Tuning) -> Result<()> {
    let ship = Body::new(0, 0, Bounds::Circle { radius: 8.0 }, EntityTag("ship"))?
        .with_size(16.0, 16.0)?
        .with_tuning(tuning)?;
    registry.spawn(Actor::Ship(ship));

    let mut asteroid = Body::new(60, -40, Bounds::Circle { radius: 12.0 }, EntityTag("asteroid"))?
        .with_tuning(tuning)?;
    asteroid.set_rotation(random_heading());
    asteroid.accelerate_forward(1.5);
    registry.spawn(Actor::Asteroid(asteroid));

    let wall = Body::new(
        -200,
        -120,
        Bounds::Rectangle {
            width: 20.0,
            height: 240.0,
        },
        EntityTag("wall"),
    )?;
    registry.spawn(Actor::Wall(wall));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let mut registry = Registry::new();
    spawn_scene(&mut registry, tuning)?;

    for tick in 0..args.ticks {
        let evicted = registry.tick().with_context(|| format!("tick {tick}"))?;
        if !evicted.is_empty() {
            info!("tick {tick}: evicted {evicted:?}");
        }
    }

    let camera = Viewport::square(-160.0, -160.0, 320.0);
    info!(
        "{} of {} entities on screen after {} ticks",
        registry.visible(&camera).count(),
        registry.len(),
        args.ticks
    );

    for (_, actor) in registry.iter() {
        let body = actor.body();
        let report = Report {
            tag: body.tag(),
            center: (body.center().x, body.center().y),
            speed: body.speed(),
            rotation: body.rotation(),
        };
        info!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
