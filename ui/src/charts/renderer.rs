use std::rc::Rc;

use api::{ComponentBreakdown, CycleTrendPoint, Distribution, TesterBreakdown};
use tracing::{debug, error};

use super::adapter;
use super::engine::{ChartEngine, EngineGate, Mounted};
use super::spec::ChartSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    /// No element with the requested id; nothing was drawn.
    MissingTarget,
    Failed,
}

/// Binds adapter output to named render targets once the engine is ready.
#[derive(Clone)]
pub struct ChartRenderer {
    engine: Rc<dyn ChartEngine>,
    gate: EngineGate,
}

impl ChartRenderer {
    pub fn new(engine: Rc<dyn ChartEngine>, gate: EngineGate) -> Self {
        Self { engine, gate }
    }

    pub async fn render_classification(
        &self,
        target: &str,
        distribution: &Distribution,
    ) -> RenderOutcome {
        self.draw(target, || adapter::classification_donut(distribution))
            .await
    }

    pub async fn render_testers(&self, target: &str, testers: &TesterBreakdown) -> RenderOutcome {
        self.draw(target, || adapter::tester_stacked_bar(testers)).await
    }

    pub async fn render_trend(&self, target: &str, trends: &[CycleTrendPoint]) -> RenderOutcome {
        self.draw(target, || adapter::trend_line(trends)).await
    }

    pub async fn render_category_by_cycle(
        &self,
        target: &str,
        trends: &[CycleTrendPoint],
    ) -> RenderOutcome {
        self.draw(target, || adapter::category_by_cycle_bar(trends))
            .await
    }

    pub async fn render_components(
        &self,
        target: &str,
        components: &ComponentBreakdown,
    ) -> RenderOutcome {
        self.draw(target, || adapter::component_dual_axis(components))
            .await
    }

    async fn draw(&self, target: &str, build: impl FnOnce() -> ChartSpec) -> RenderOutcome {
        self.gate.wait().await;

        let spec = build();
        match self.engine.mount(target, &spec).await {
            Ok(Mounted::Drawn) => RenderOutcome::Drawn,
            Ok(Mounted::MissingTarget) => {
                debug!(canvas = target, "render target not found; chart skipped");
                RenderOutcome::MissingTarget
            }
            Err(err) => {
                error!(canvas = target, %err, "chart mount failed");
                RenderOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use api::{CycleTrendPoint, OrderedMap, TesterCounts};
    use async_trait::async_trait;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::charts::engine::{engine_gate, ChartError, ReadySignal};
    use crate::charts::spec::ChartKind;

    /// Records mounts; ids listed in `present` are treated as existing canvases.
    #[derive(Default)]
    struct FakeEngine {
        present: Vec<&'static str>,
        mounted: RefCell<Vec<(String, ChartKind)>>,
        fail: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl ChartEngine for FakeEngine {
        async fn mount(&self, target: &str, spec: &ChartSpec) -> Result<Mounted, ChartError> {
            if self.fail.get() {
                return Err(ChartError::Eval("bridge closed".into()));
            }
            if !self.present.iter().any(|id| *id == target) {
                return Ok(Mounted::MissingTarget);
            }
            self.mounted
                .borrow_mut()
                .push((target.to_string(), spec.kind));
            Ok(Mounted::Drawn)
        }
    }

    fn renderer_with(present: Vec<&'static str>) -> (Rc<FakeEngine>, ChartRenderer, ReadySignal) {
        let engine = Rc::new(FakeEngine {
            present,
            ..FakeEngine::default()
        });
        let (signal, gate) = engine_gate();
        let renderer = ChartRenderer::new(engine.clone(), gate);
        (engine, renderer, signal)
    }

    #[test]
    fn nothing_mounts_before_engine_ready() {
        let (engine, renderer, signal) = renderer_with(vec!["classification"]);
        let outcome = Rc::new(Cell::new(None));

        let mut pool = LocalPool::new();
        let slot = outcome.clone();
        pool.spawner()
            .spawn_local(async move {
                let distribution: Distribution = [("valid", 3u64)].into_iter().collect();
                slot.set(Some(
                    renderer
                        .render_classification("classification", &distribution)
                        .await,
                ));
            })
            .unwrap();

        pool.run_until_stalled();
        assert!(engine.mounted.borrow().is_empty());
        assert_eq!(outcome.get(), None);

        signal.resolve();
        pool.run_until_stalled();
        assert_eq!(outcome.get(), Some(RenderOutcome::Drawn));
        assert_eq!(
            *engine.mounted.borrow(),
            vec![("classification".to_string(), ChartKind::Doughnut)]
        );
    }

    #[test]
    fn missing_target_is_a_quiet_no_op() {
        let (engine, renderer, signal) = renderer_with(vec![]);
        signal.resolve();

        let trends = vec![CycleTrendPoint {
            cycle_name: "Sprint 1".into(),
            testing_accuracy: 0.5,
            ..CycleTrendPoint::default()
        }];
        let outcome = block_on(renderer.render_trend("trend", &trends));

        assert_eq!(outcome, RenderOutcome::MissingTarget);
        assert!(engine.mounted.borrow().is_empty());
    }

    #[test]
    fn each_entry_point_draws_its_kind() {
        let (engine, renderer, signal) =
            renderer_with(vec!["testers", "components", "categories"]);
        signal.resolve();

        let mut testers = OrderedMap::new();
        testers.insert("alice", TesterCounts::default());
        let components: ComponentBreakdown = OrderedMap::new();

        block_on(async {
            assert_eq!(
                renderer.render_testers("testers", &testers).await,
                RenderOutcome::Drawn
            );
            assert_eq!(
                renderer.render_components("components", &components).await,
                RenderOutcome::Drawn
            );
            assert_eq!(
                renderer.render_category_by_cycle("categories", &[]).await,
                RenderOutcome::Drawn
            );
        });

        let kinds: Vec<ChartKind> = engine.mounted.borrow().iter().map(|(_, k)| *k).collect();
        assert_eq!(kinds, vec![ChartKind::Bar, ChartKind::Bar, ChartKind::Bar]);
    }

    #[test]
    fn bridge_failure_reports_failed() {
        let (engine, renderer, signal) = renderer_with(vec!["classification"]);
        engine.fail.set(true);
        signal.resolve();

        let outcome =
            block_on(renderer.render_classification("classification", &Distribution::new()));
        assert_eq!(outcome, RenderOutcome::Failed);
    }
}
