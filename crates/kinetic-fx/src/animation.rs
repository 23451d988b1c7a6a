use std::time::Duration;

use crate::curve::{FrameValues, PropertyCurve};
use crate::easing::Easing;
use crate::error::AnimationError;
use crate::hook::BeginHook;
use crate::property::{PropertyDescriptor, PropertyValue};
use crate::target::StyleTarget;

// ── AnimationOptions ──────────────────────────────────────────────────────

/// Animation configuration, built GTK-style.
///
/// ```rust
/// use std::time::Duration;
/// use kinetic_fx::prelude::*;
///
/// let options = AnimationOptions::new()
///     .duration(Duration::from_millis(600))
///     .easing(Easing::Linear)
///     .property("clip", PropertyDescriptor::new("rect(0px 50px 50px 0px)", "rect(10px 30px 30px 10px)"));
/// assert_eq!(options.properties.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationOptions {
    pub duration: Duration,
    /// Wait before the first frame. Not repeated.
    pub delay: Duration,
    /// Extra play-throughs after the first.
    pub repeat: u32,
    pub easing: Easing,
    /// Animated properties in declaration order.
    pub properties: Vec<(String, PropertyDescriptor)>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(350),
            delay: Duration::ZERO,
            repeat: 0,
            easing: Easing::default(),
            properties: Vec::new(),
        }
    }
}

impl AnimationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, v: Duration) -> Self { self.duration = v; self }
    pub fn delay(mut self, v: Duration) -> Self { self.delay = v; self }
    pub fn repeat(mut self, v: u32) -> Self { self.repeat = v; self }
    pub fn easing(mut self, v: Easing) -> Self { self.easing = v; self }

    /// Adds a property, replacing an earlier declaration of the same name.
    pub fn property(mut self, name: impl Into<String>, desc: PropertyDescriptor) -> Self {
        let name = name.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = desc,
            None => self.properties.push((name, desc)),
        }
        self
    }
}

// ── AnimationStatus ───────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AnimationStatus {
    Stopped,
    Playing,
    Paused,
}

// ── Animation ─────────────────────────────────────────────────────────────

/// A frame-driven property animation.
///
/// The animation does not own a timer: the caller ticks it once per frame with
/// the elapsed delta, e.g. from [`kinetic_engine::time::FrameClock`].
///
/// On the first tick of each play-through the curve is built: starts missing from
/// the descriptors are read from the target, every property gets its base
/// interpolator, then each [`BeginHook`] runs. Hooks run once; the resulting
/// curve is evaluated every frame.
pub struct Animation {
    options: AnimationOptions,
    hooks: Vec<Box<dyn BeginHook>>,
    curve: Option<PropertyCurve>,
    status: AnimationStatus,
    /// Time since `play`, delay included.
    elapsed: Duration,
    repeats_left: u32,
    percent: f64,
    on_begin: Option<Box<dyn FnMut()>>,
    on_animate: Option<Box<dyn FnMut(&FrameValues)>>,
    on_end: Option<Box<dyn FnMut()>>,
    on_stop: Option<Box<dyn FnMut()>>,
}

impl Animation {
    pub fn new(options: AnimationOptions) -> Self {
        Self {
            repeats_left: options.repeat,
            options,
            hooks: Vec::new(),
            curve: None,
            status: AnimationStatus::Stopped,
            elapsed: Duration::ZERO,
            percent: 0.0,
            on_begin: None,
            on_animate: None,
            on_end: None,
            on_stop: None,
        }
    }

    /// Installs a hook that runs when the curve is built.
    pub fn with_hook(mut self, hook: impl BeginHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn on_begin(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_begin = Some(Box::new(f));
        self
    }

    /// Called after every frame with the values just written to the target.
    pub fn on_animate(mut self, f: impl FnMut(&FrameValues) + 'static) -> Self {
        self.on_animate = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    pub fn on_stop(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_stop = Some(Box::new(f));
        self
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    /// Linear progress of the current play-through, in `[0, 1]`.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    /// The curve of the current play-through, once it has begun.
    pub fn curve(&self) -> Option<&PropertyCurve> {
        self.curve.as_ref()
    }

    /// Starts from the beginning, or resumes when paused.
    pub fn play(&mut self) {
        match self.status {
            AnimationStatus::Paused => {}
            AnimationStatus::Playing => return,
            AnimationStatus::Stopped => {
                self.elapsed = Duration::ZERO;
                self.percent = 0.0;
                self.repeats_left = self.options.repeat;
                self.curve = None;
            }
        }
        log::debug!("animation playing ({} properties)", self.options.properties.len());
        self.status = AnimationStatus::Playing;
    }

    pub fn pause(&mut self) {
        if self.status == AnimationStatus::Playing {
            self.status = AnimationStatus::Paused;
        }
    }

    /// Stops the animation. With `goto_end`, the final frame is applied first.
    pub fn stop(&mut self, goto_end: bool, target: &mut dyn StyleTarget) -> Result<(), AnimationError> {
        if self.status == AnimationStatus::Stopped {
            return Ok(());
        }
        if goto_end {
            if self.curve.is_none() {
                self.begin_or_stop(target)?;
            }
            self.apply(1.0, target);
        }
        self.status = AnimationStatus::Stopped;
        if let Some(f) = self.on_stop.as_mut() {
            f();
        }
        Ok(())
    }

    /// Advances by `dt` and writes the new frame to `target`.
    ///
    /// Returns the status after the tick. An error means the animation could not
    /// begin; it is stopped and nothing was written.
    pub fn tick(&mut self, dt: Duration, target: &mut dyn StyleTarget) -> Result<AnimationStatus, AnimationError> {
        if self.status != AnimationStatus::Playing {
            return Ok(self.status);
        }

        self.elapsed += dt;
        if self.elapsed < self.options.delay {
            return Ok(self.status);
        }

        if self.curve.is_none() {
            self.begin_or_stop(target)?;
            if let Some(f) = self.on_begin.as_mut() {
                f();
            }
        }

        let active = self.elapsed - self.options.delay;
        let percent = if self.options.duration.is_zero() {
            1.0
        } else {
            active.div_duration_f64(self.options.duration).min(1.0)
        };
        self.apply(percent, target);

        if percent >= 1.0 {
            if self.repeats_left > 0 {
                self.repeats_left -= 1;
                self.elapsed = self.options.delay;
                log::debug!("animation repeating ({} left)", self.repeats_left);
            } else {
                self.status = AnimationStatus::Stopped;
                if let Some(f) = self.on_end.as_mut() {
                    f();
                }
            }
        }

        Ok(self.status)
    }

    /// Builds the curve; on failure the animation is stopped and the error returned.
    fn begin_or_stop(&mut self, target: &dyn StyleTarget) -> Result<(), AnimationError> {
        self.begin(target).inspect_err(|err| {
            log::error!("animation failed to begin: {}", err);
            self.status = AnimationStatus::Stopped;
        })
    }

    fn begin(&mut self, target: &dyn StyleTarget) -> Result<(), AnimationError> {
        let props: Vec<(String, PropertyDescriptor)> = self
            .options
            .properties
            .iter()
            .map(|(name, desc)| -> Result<(String, PropertyDescriptor), AnimationError> {
                let start = match &desc.start {
                    Some(start) => start.clone(),
                    None => target
                        .style(name)
                        .map(PropertyValue::Text)
                        .ok_or_else(|| AnimationError::MissingStart { property: name.clone() })?,
                };
                Ok((name.clone(), PropertyDescriptor { start: Some(start), ..desc.clone() }))
            })
            .collect::<Result<_, _>>()?;

        let mut curve = PropertyCurve::resolve(&props);
        for hook in &self.hooks {
            hook.before_begin(&props, &mut curve)?;
        }
        curve.check()?;

        log::debug!("animation curve built: {} properties", curve.len());
        self.curve = Some(curve);
        Ok(())
    }

    fn apply(&mut self, percent: f64, target: &mut dyn StyleTarget) {
        self.percent = percent;
        let Some(curve) = &self.curve else { return };

        let ratio = self.options.easing.eval(percent);
        let values = curve.value_at(ratio);
        for (name, value) in values.iter() {
            target.set_style(name, value);
        }
        log::trace!("frame at {:.3} (ratio {:.3}): {:?}", percent, ratio, values);

        if let Some(f) = self.on_animate.as_mut() {
            f(&values);
        }
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("options", &self.options)
            .field("status", &self.status)
            .field("percent", &self.percent)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}
