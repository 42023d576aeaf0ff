use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::animation::{Advance, Animation};
use crate::cloud::{CloudLoop, CloudSize, Viewport};
use crate::constants::*;
use crate::oscillator::RotationOscillator;

/// One drawable element, in back-to-front order.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Layer {
    Cloud(usize), // Index into `SplashAnimation::clouds`
    Parachute,
}

/// The splash screen's animation state: a swaying parachute and four rising clouds.
pub struct SplashAnimation {
    viewport: Viewport,
    pub parachute: RotationOscillator,
    pub clouds: Vec<CloudLoop>,
}

impl SplashAnimation {
    pub fn new(viewport: Viewport, seed: Option<u64>) -> Self {
        let clouds = CLOUD_SIZES
            .iter()
            .enumerate()
            .map(|(i, &side)| match seed {
                Some(seed) => CloudLoop::with_rng(
                    CloudSize::square(side),
                    viewport,
                    StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                ),
                None => CloudLoop::new(CloudSize::square(side), viewport),
            })
            .collect();

        Self {
            viewport,
            parachute: RotationOscillator::new(),
            clouds,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Advance every loop by `dt` seconds. Returns the indices of clouds that finished a rise this frame.
    pub fn update(&mut self, dt: f32) -> Vec<usize> {
        self.parachute.update(dt);
        self.clouds
            .iter_mut()
            .enumerate()
            .filter_map(|(i, cloud)| (cloud.update(dt) == Advance::Completed).then_some(i))
            .collect()
    }

    /// Stop every loop; values stay where they are.
    pub fn unmount(&mut self) {
        self.parachute.cancel();
        for cloud in self.clouds.iter_mut() {
            cloud.cancel();
        }
        log::debug!("splash animation unmounted");
    }

    pub fn is_unmounted(&self) -> bool {
        self.parachute.is_cancelled() && self.clouds.iter().all(|c| c.is_cancelled())
    }

    /// Back clouds, then the parachute, then the front cloud(s).
    pub fn layers(&self) -> Vec<Layer> {
        let (front, back): (Vec<_>, Vec<_>) = (0..self.clouds.len())
            .partition(|&i| self.clouds[i].size().height >= FRONT_CLOUD_SIZE);

        back.into_iter()
            .map(Layer::Cloud)
            .chain(std::iter::once(Layer::Parachute))
            .chain(front.into_iter().map(Layer::Cloud))
            .collect()
    }
}
