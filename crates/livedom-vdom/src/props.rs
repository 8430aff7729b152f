//! Property Reconciler
//!
//! Brings a live element's attributes and boolean flags from one property
//! set to another. Custom properties are never touched.

use crate::{HostTree, PropClass, PropValue, Props, Reconciler, VdomResult};

impl<H: HostTree> Reconciler<'_, H> {
    /// Reflect one property onto the live element.
    ///
    /// `true` writes the attribute and sets the flag; `false` only clears the
    /// flag. Generic values write the attribute's string form.
    pub fn set_property(&mut self, handle: H::Handle, name: &str, value: &PropValue) -> VdomResult<()> {
        match self.config.classify(name, value) {
            PropClass::Custom => return Ok(()),
            PropClass::Boolean => {
                if value.is_truthy() {
                    self.host.set_attribute(handle, name, &value.to_string())?;
                    self.host.set_flag(handle, name, true)?;
                } else {
                    self.host.set_flag(handle, name, false)?;
                }
            }
            PropClass::Generic => self.host.set_attribute(handle, name, &value.to_string())?,
        }
        self.stats.property_writes += 1;
        Ok(())
    }

    /// Remove a property; `old` decides whether the flag is cleared too
    pub fn remove_property(&mut self, handle: H::Handle, name: &str, old: Option<&PropValue>) -> VdomResult<()> {
        if self.config.is_custom_property(name) {
            return Ok(());
        }
        self.host.remove_attribute(handle, name)?;
        if old.is_some_and(PropValue::is_boolean) {
            self.host.set_flag(handle, name, false)?;
        }
        self.stats.property_writes += 1;
        Ok(())
    }

    /// Falsy or missing `new` removes; a changed or newly truthy value is set;
    /// an unchanged value is left alone.
    pub fn update_property(
        &mut self,
        handle: H::Handle,
        name: &str,
        new: Option<&PropValue>,
        old: Option<&PropValue>,
    ) -> VdomResult<()> {
        match new {
            Some(value) if value.is_truthy() => {
                let unchanged = old.is_some_and(|old| old.is_truthy() && old == value);
                if unchanged {
                    Ok(())
                } else {
                    self.set_property(handle, name, value)
                }
            }
            _ => self.remove_property(handle, name, old),
        }
    }

    /// Visit every key of either map once, passing its own (new, old) pair
    pub fn update_properties(&mut self, handle: H::Handle, new: &Props, old: &Props) -> VdomResult<()> {
        let removed = old.keys().filter(|name| !new.contains_key(*name));
        for name in new.keys().chain(removed) {
            self.update_property(handle, name, new.get(name), old.get(name))?;
        }
        Ok(())
    }
}
