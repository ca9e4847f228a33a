//! Page Controller
//!
//! Default `MainController`: owns the reference registry and the script
//! collaborators, and forwards modal/navigation requests to the host over a
//! channel.

use std::cell::RefCell;

use crossbeam_channel::{Receiver, Sender};

use crate::app::{ActionEvaluator, MainController, ModalRequest, ReferenceRegistry};
use crate::domain::ElementPath;
use crate::error::Result;
use crate::eventing::ControllerEvent;
use crate::services::ScriptLoader;

/// Controller of one page
pub struct PageController {
    references: RefCell<ReferenceRegistry>,
    evaluator: Box<dyn ActionEvaluator>,
    loader: Box<dyn ScriptLoader>,
    /// Event sender (for internal use)
    tx: Sender<ControllerEvent>,
}

impl PageController {
    /// Create a controller and the receiver the host drains events from
    pub fn new(
        evaluator: impl ActionEvaluator + 'static,
        loader: impl ScriptLoader + 'static,
    ) -> (Self, Receiver<ControllerEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();

        let controller = Self {
            references: RefCell::new(ReferenceRegistry::new()),
            evaluator: Box::new(evaluator),
            loader: Box::new(loader),
            tx,
        };

        (controller, rx)
    }

    /// Number of registered reference names
    pub fn reference_count(&self) -> usize {
        self.references.borrow().len()
    }

    fn emit(&self, event: ControllerEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("Controller event dropped, host receiver is gone");
        }
    }
}

impl MainController for PageController {
    fn register_reference_name(&self, name: &str, path: &ElementPath) -> Result<()> {
        self.references.borrow_mut().register(name, path)
    }

    fn release_references(&self, path: &ElementPath) {
        self.references.borrow_mut().release_below(path);
    }

    fn resolve_reference(&self, name: &str) -> Option<ElementPath> {
        self.references.borrow().resolve(name).cloned()
    }

    fn open_modal(&self, request: ModalRequest) {
        tracing::info!(path = %request.path, url = %request.url, "Opening modal");
        self.emit(ControllerEvent::OpenModal(request));
    }

    fn go_to_page(&self, url: &str) {
        tracing::info!(url, "Navigating");
        self.emit(ControllerEvent::go_to_page(url));
    }

    fn action_evaluator(&self) -> &dyn ActionEvaluator {
        self.evaluator.as_ref()
    }

    fn script_loader(&self) -> &dyn ScriptLoader {
        self.loader.as_ref()
    }
}

impl std::fmt::Debug for PageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("references", &self.references.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TracingActionEvaluator;
    use crate::domain::ModalDimensions;
    use crate::services::StaticScriptLoader;

    #[test]
    fn test_requests_reach_the_host() {
        let (controller, events) =
            PageController::new(TracingActionEvaluator, StaticScriptLoader::new());

        controller.go_to_page("orders.html");
        controller.open_modal(ModalRequest::new(
            ElementPath::from("window.add"),
            "orderDetails.html",
            ModalDimensions::default(),
        ));

        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0], ControllerEvent::go_to_page("orders.html"));
        assert_eq!(received[1].url(), "orderDetails.html");
    }

    #[test]
    fn test_dropped_receiver_does_not_panic() {
        let (controller, events) =
            PageController::new(TracingActionEvaluator, StaticScriptLoader::new());
        drop(events);

        controller.go_to_page("orders.html");
    }

    #[test]
    fn test_reference_collision_surfaces() {
        let (controller, _events) =
            PageController::new(TracingActionEvaluator, StaticScriptLoader::new());

        controller
            .register_reference_name("grid", &ElementPath::from("window.grid"))
            .expect("first");
        let err = controller
            .register_reference_name("grid", &ElementPath::from("window.other"))
            .unwrap_err();

        assert!(err.is_configuration());
        assert_eq!(controller.reference_count(), 1);
    }
}
