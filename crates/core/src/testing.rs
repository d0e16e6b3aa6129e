//! Recording test doubles for the repository ports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::descriptor::WidgetDescriptor;
use crate::repository::{RepositoryError, WidgetDescriptorRepository, WidgetRepository};
use crate::value_objects::{LegacyWidgetType, WidgetId};
use crate::widget::Widget;

fn backend_down() -> RepositoryError {
    RepositoryError::Backend("backend unavailable".into())
}

#[derive(Default)]
pub struct FakeWidgetRepo {
    widgets: Mutex<Vec<Widget>>,
    calls: AtomicUsize,
    saves: AtomicUsize,
    failing: bool,
}

impl FakeWidgetRepo {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with(widgets: Vec<Widget>) -> Self {
        Self {
            widgets: Mutex::new(widgets),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.widgets.lock().unwrap().len()
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            Err(backend_down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl WidgetRepository for FakeWidgetRepo {
    async fn save(&self, widget: Widget) -> Result<Widget, RepositoryError> {
        self.enter()?;
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut widgets = self.widgets.lock().unwrap();
        widgets.retain(|w| w.id() != widget.id());
        widgets.push(widget.clone());
        Ok(widget)
    }

    async fn find_by_id(&self, id: &WidgetId) -> Result<Option<Widget>, RepositoryError> {
        self.enter()?;
        let widgets = self.widgets.lock().unwrap();
        Ok(widgets.iter().find(|w| w.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Widget>, RepositoryError> {
        self.enter()?;
        let mut widgets = self.widgets.lock().unwrap().clone();
        widgets.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Ok(widgets)
    }

    async fn find_by_type(
        &self,
        widget_type: LegacyWidgetType,
    ) -> Result<Vec<Widget>, RepositoryError> {
        let all = self.find_all().await?;
        Ok(all
            .into_iter()
            .filter(|w| w.widget_type() == widget_type)
            .collect())
    }

    async fn delete(&self, id: &WidgetId) -> Result<(), RepositoryError> {
        self.enter()?;
        self.widgets.lock().unwrap().retain(|w| w.id() != id);
        Ok(())
    }

    async fn exists(&self, id: &WidgetId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[derive(Default)]
pub struct FakeDescriptorRepo {
    descriptors: Mutex<Vec<WidgetDescriptor>>,
    calls: AtomicUsize,
    saves: AtomicUsize,
    failing: bool,
}

impl FakeDescriptorRepo {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            Err(backend_down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl WidgetDescriptorRepository for FakeDescriptorRepo {
    async fn save(&self, descriptor: WidgetDescriptor) -> Result<WidgetDescriptor, RepositoryError> {
        self.enter()?;
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut descriptors = self.descriptors.lock().unwrap();
        match descriptors.iter_mut().find(|d| d.id() == descriptor.id()) {
            Some(slot) => *slot = descriptor.clone(),
            None => descriptors.push(descriptor.clone()),
        }
        Ok(descriptor)
    }

    async fn find_by_id(&self, id: &WidgetId) -> Result<Option<WidgetDescriptor>, RepositoryError> {
        self.enter()?;
        let descriptors = self.descriptors.lock().unwrap();
        Ok(descriptors.iter().find(|d| d.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<WidgetDescriptor>, RepositoryError> {
        self.enter()?;
        Ok(self.descriptors.lock().unwrap().clone())
    }

    async fn delete(&self, id: &WidgetId) -> Result<(), RepositoryError> {
        self.enter()?;
        self.descriptors.lock().unwrap().retain(|d| d.id() != id);
        Ok(())
    }

    async fn exists(&self, id: &WidgetId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
