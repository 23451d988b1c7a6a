use kinetic_complex::{is_complex, ComplexValue};

use crate::curve::{Interpolator, PropertyCurve};
use crate::error::AnimationError;
use crate::property::{PropertyDescriptor, PropertyValue};

/// Runs once per play-through, after base resolution and before the first
/// frame, and may replace how individual properties are interpolated.
///
/// `props` carries every descriptor with its start filled in.
pub trait BeginHook {
    fn before_begin(
        &self,
        props: &[(String, PropertyDescriptor)],
        curve: &mut PropertyCurve,
    ) -> Result<(), AnimationError>;
}

/// Routes functional-notation properties (`clip: rect(...)`,
/// `transform: rotate(...) translateX(...)`) through [`ComplexValue`].
///
/// A property is complex when its start is text containing `(`. This is checked
/// per property, so one animation can mix complex, numeric and color properties.
/// Complex detection wins over the color-name rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexHook;

impl BeginHook for ComplexHook {
    fn before_begin(
        &self,
        props: &[(String, PropertyDescriptor)],
        curve: &mut PropertyCurve,
    ) -> Result<(), AnimationError> {
        for (name, desc) in props {
            let Some(PropertyValue::Text(start)) = &desc.start else { continue };
            if !is_complex(start) {
                continue;
            }

            let end = desc.end.to_style_string();
            let value = ComplexValue::parse(start, &end).map_err(|source| AnimationError::Complex {
                property: name.clone(),
                source,
            })?;

            log::debug!("property {:?} animates as complex value ({} terms)", name, value.len());
            curve.replace(name, Interpolator::Complex(value));
        }
        Ok(())
    }
}
