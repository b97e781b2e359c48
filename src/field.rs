//! Tag field runtime
//!
//! [`TagField`] ties a host element to a [`TagFieldModel`]: messages go
//! through [`update`], the returned commands are executed against the host,
//! and the view is re-rendered before control returns to the caller.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

use crate::commands::{Cmd, Effect};
use crate::config::{TagConfig, TransformRegistry};
use crate::host::{HostElement, TARGET_CLASS};
use crate::messages::{ApiMsg, HostMsg, Msg};
use crate::model::{HostSnapshot, TagFieldModel};
use crate::normalize::TagInput;
use crate::update::update;
use crate::view::{render_view, FieldView};

static NEXT_AUGMENTATION: AtomicU64 = AtomicU64::new(1);

/// A tag editor attached to a host element
#[derive(Debug)]
pub struct TagField<H: HostElement> {
    host: H,
    model: TagFieldModel,
    view: FieldView,
    effects: VecDeque<Effect>,
    id: u64,
}

impl<H: HostElement> TagField<H> {
    /// Attach to `host` using the built-in transforms.
    ///
    /// # Errors
    ///
    /// Fails if the host's dataset holds a malformed configuration.
    pub fn attach(host: H) -> Result<Self> {
        Self::attach_with(host, &TransformRegistry::default())
    }

    /// Attach to `host`, resolving the `transform` key against `transforms`.
    ///
    /// A host that still carries an earlier augmentation has it removed
    /// first, so attaching twice never leaves two fields wired to one host.
    ///
    /// # Errors
    ///
    /// Fails if the host's dataset holds a malformed configuration.
    pub fn attach_with(host: H, transforms: &TransformRegistry) -> Result<Self> {
        let config = TagConfig::from_dataset(host.dataset(), transforms)
            .context("Invalid tag field configuration")?;
        Ok(Self::attach_with_config(host, config))
    }

    /// Attach with an explicit configuration, ignoring the host's dataset
    pub fn attach_with_config(mut host: H, config: TagConfig) -> Self {
        if let Some(previous) = host.augmentation() {
            tracing::debug!(previous, "Removing previous augmentation from host");
            host.set_augmentation(None);
            host.remove_class(TARGET_CLASS);
        }

        let snapshot = HostSnapshot::capture(&host);
        let id = NEXT_AUGMENTATION.fetch_add(1, Ordering::Relaxed);
        host.set_augmentation(Some(id));
        host.add_class(TARGET_CLASS);

        let model = TagFieldModel::new(config, &host.value(), snapshot);
        let view = render_view(&model);
        tracing::debug!(id, tags = view.chips.len(), "Attached tag field");

        Self {
            host,
            model,
            view,
            effects: VecDeque::new(),
            id,
        }
    }

    /// Remove the augmentation and hand the host back
    pub fn detach(mut self) -> H {
        if self.host.augmentation() == Some(self.id) {
            self.host.set_augmentation(None);
        }
        self.host.remove_class(TARGET_CLASS);
        self.host
    }

    pub fn get_value(&self) -> &str {
        self.model.engine.value()
    }

    pub fn get_values(&self) -> Vec<String> {
        self.model.engine.values()
    }

    pub fn add_value(&mut self, value: impl Into<TagInput>) {
        self.dispatch(Msg::Api(ApiMsg::AddValue(value.into())));
    }

    pub fn add_readonly_value(&mut self, value: impl Into<TagInput>) {
        self.dispatch(Msg::Api(ApiMsg::AddReadonlyValue(value.into())));
    }

    pub fn remove_value(&mut self, value: impl Into<TagInput>) {
        self.dispatch(Msg::Api(ApiMsg::RemoveValue(value.into())));
    }

    /// Change the host value from outside and fire its change notification
    pub fn set_host_value(&mut self, value: &str) {
        self.host.set_value(value);
        self.host.notify_change();
        self.dispatch(Msg::Host(HostMsg::Changed(value.to_string())));
    }

    /// Run one message through the update cycle and re-render
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
        self.view = render_view(&self.model);
    }

    /// Current view description
    pub fn view(&self) -> &FieldView {
        &self.view
    }

    pub fn model(&self) -> &TagFieldModel {
        &self.model
    }

    pub fn config(&self) -> &TagConfig {
        self.model.config()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn augmentation_id(&self) -> u64 {
        self.id
    }

    /// Visual cues produced since the last call, oldest first
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.effects.drain(..).collect()
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::CommitValue(value) => {
                self.host.set_value(&value);
                self.host.notify_change();
            }
            Cmd::Effect(effect) => self.effects.push_back(effect),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
