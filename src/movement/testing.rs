//! Test doubles for driving the locomotion core without a Bevy world.

use bevy::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::movement::{
    ActionController, Actor, AnimationDriver, Body, BoundingBox, LocomotionContext, RoomGrid,
    Transition,
};

/// Collaborator side effects, in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SetPosition(f32, f32),
    SetVelocityX(f32),
    SetVelocityY(f32),
    SetOnGround(bool),
    SetGravitated(bool),
    SetTreatLadderTopAsGround(bool),
    ChangeAnimation(String),
    Pause,
    Unpause,
}

pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

/// Body with no physics: it only stores what the states set.
#[derive(Debug)]
pub(crate) struct SimBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub gravitated: bool,
    pub treat_ladder_top_as_ground: bool,
    pub size: Vec2,
    log: CallLog,
}

impl SimBody {
    pub fn new(log: CallLog) -> Self {
        Self {
            position: Vec2::new(100.0, 96.0),
            velocity: Vec2::ZERO,
            on_ground: true,
            gravitated: true,
            treat_ladder_top_as_ground: true,
            size: Vec2::new(10.0, 14.0),
            log,
        }
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Body for SimBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.record(Call::SetPosition(x, y));
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
        self.record(Call::SetVelocityX(vx));
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
        self.record(Call::SetVelocityY(vy));
    }

    fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    fn set_on_ground(&mut self, on_ground: bool) {
        self.on_ground = on_ground;
        self.record(Call::SetOnGround(on_ground));
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_feet(self.position, self.size)
    }

    fn is_gravitated(&self) -> bool {
        self.gravitated
    }

    fn set_gravitated(&mut self, gravitated: bool) {
        self.gravitated = gravitated;
        self.record(Call::SetGravitated(gravitated));
    }

    fn treats_ladder_top_as_ground(&self) -> bool {
        self.treat_ladder_top_as_ground
    }

    fn set_treat_ladder_top_as_ground(&mut self, treat: bool) {
        self.treat_ladder_top_as_ground = treat;
        self.record(Call::SetTreatLadderTopAsGround(treat));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ScriptedController {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Jump pressed this tick. A press also counts as held.
    pub jump: bool,
    pub jump_held: bool,
}

impl ScriptedController {
    /// Every combination of the five intents.
    pub fn all_combinations() -> impl Iterator<Item = ScriptedController> {
        (0u8..32).map(|bits| ScriptedController {
            up: bits & 1 != 0,
            down: bits & 2 != 0,
            left: bits & 4 != 0,
            right: bits & 8 != 0,
            jump: bits & 16 != 0,
            jump_held: false,
        })
    }
}

impl ActionController for ScriptedController {
    fn should_move_up(&self) -> bool {
        self.up
    }

    fn should_move_down(&self) -> bool {
        self.down
    }

    fn should_move_left(&self) -> bool {
        self.left
    }

    fn should_move_right(&self) -> bool {
        self.right
    }

    fn should_jump(&self) -> bool {
        self.jump
    }

    fn is_jump_held(&self) -> bool {
        self.jump || self.jump_held
    }
}

#[derive(Debug)]
pub(crate) struct RecordingAnimator {
    pub current: Option<String>,
    pub paused: bool,
    /// Number of times the clip actually changed.
    pub restarts: u32,
    log: CallLog,
}

impl RecordingAnimator {
    pub fn new(log: CallLog) -> Self {
        Self {
            current: None,
            paused: false,
            restarts: 0,
            log,
        }
    }
}

impl AnimationDriver for RecordingAnimator {
    fn change_animation(&mut self, name: &str) {
        self.log
            .borrow_mut()
            .push(Call::ChangeAnimation(name.to_string()));
        if self.current.as_deref() != Some(name) {
            self.current = Some(name.to_string());
            self.restarts += 1;
        }
    }

    fn pause(&mut self) {
        self.paused = true;
        self.log.borrow_mut().push(Call::Pause);
    }

    fn unpause(&mut self) {
        self.paused = false;
        self.log.borrow_mut().push(Call::Unpause);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

pub(crate) struct FixedGrid(pub i32);

impl RoomGrid for FixedGrid {
    fn grid_size(&self) -> i32 {
        self.0
    }
}

/// One actor's collaborators plus their shared call log.
pub(crate) struct Harness {
    pub body: SimBody,
    pub controller: ScriptedController,
    pub animator: RecordingAnimator,
    pub grid: FixedGrid,
    log: CallLog,
}

impl Harness {
    pub fn new() -> Self {
        let log = CallLog::default();
        Self {
            body: SimBody::new(log.clone()),
            controller: ScriptedController::default(),
            animator: RecordingAnimator::new(log.clone()),
            grid: FixedGrid(16),
            log,
        }
    }

    pub fn tick(&mut self, actor: &mut Actor) -> Option<Transition> {
        let mut ctx = LocomotionContext {
            body: &mut self.body,
            controller: &self.controller,
            animation: &mut self.animator,
            room: &self.grid,
        };
        actor.update(1.0 / 60.0, &mut ctx)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.log.borrow_mut().clear();
    }
}
