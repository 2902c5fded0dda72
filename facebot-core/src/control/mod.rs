//! Cooperative control loop
//!
//! One iteration is: route at most one command, then poll the face timer
//! once. The firmware calls [`Robot::step`] forever with the current time;
//! tests call it with a synthetic clock.

use crate::config::RobotConfig;
use crate::face::FaceAnimator;
use crate::motion::{MotionDriver, MovementIntent};
use crate::router::{CommandRouter, Dispatch};
use crate::time::Millis;
use crate::traits::{CommandInput, DisplayError, FaceCanvas, MotorChannels, StatusOutput};

/// The whole robot: motion, face and command routing
pub struct Robot<M, D, I, S> {
    motion: MotionDriver<M>,
    face: FaceAnimator<D>,
    router: CommandRouter<I, S>,
}

impl<M, D, I, S> Robot<M, D, I, S>
where
    M: MotorChannels,
    D: FaceCanvas,
    I: CommandInput,
    S: StatusOutput,
{
    /// Run the startup sequence
    ///
    /// Motors are stopped first, then the display is initialized and the
    /// blinking face shown, then the command summary is written. A display
    /// failure is returned as-is; the caller must not continue without a
    /// face.
    pub fn start(
        config: &RobotConfig,
        motors: M,
        canvas: D,
        input: I,
        status: S,
        now: Millis,
    ) -> Result<Self, DisplayError> {
        let mut motion = MotionDriver::new(motors, config.drive);
        motion.drive(MovementIntent::Stop);

        let face = FaceAnimator::start(canvas, config.blink, now)?;

        let mut router = CommandRouter::new(input, status);
        router.announce();

        Ok(Self {
            motion,
            face,
            router,
        })
    }

    /// Run one loop iteration
    pub fn step(&mut self, now: Millis) -> Dispatch {
        let dispatch = self
            .router
            .poll_and_dispatch(now, &mut self.motion, &mut self.face);
        self.face.poll(now);
        dispatch
    }

    /// Motion driver
    pub fn motion(&self) -> &MotionDriver<M> {
        &self.motion
    }

    /// Face animator
    pub fn face(&self) -> &FaceAnimator<D> {
        &self.face
    }

    /// Command router
    pub fn router(&self) -> &CommandRouter<I, S> {
        &self.router
    }

    /// Command router, mutably (tests feed bytes through this)
    pub fn router_mut(&mut self) -> &mut CommandRouter<I, S> {
        &mut self.router
    }
}
