use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use crate::core::{ChartSeries, to_series};
use crate::error::{DashboardError, DashboardResult};
use crate::fetch::{ContinentSource, HttpContinentFetcher};
use crate::render::{BarChartStyle, DashboardFrame, Renderer};

use super::{
    DashboardConfig, ErrorSink, FetchOutcome, HostContext, TracingErrorSink, WidgetSnapshot,
    WidgetState,
};

/// Controller owning one dashboard widget instance.
///
/// All state lives on the thread driving the widget. The only suspension
/// point is the outbound fetch returned by [`DashboardWidget::start`]; the
/// host polls that future on its own event loop.
///
/// Renderers and sinks must not call back into the widget from inside
/// `render`/`record`.
pub struct DashboardWidget<S, R, K = TracingErrorSink> {
    source: Rc<S>,
    inner: Rc<RefCell<WidgetInner<R, K>>>,
}

struct WidgetInner<R, K> {
    style: BarChartStyle,
    context: HostContext,
    state: WidgetState,
    series: ChartSeries,
    renderer: R,
    sink: K,
    live_mount: Option<u64>,
    mount_count: u64,
    last_transition_at: Option<DateTime<Utc>>,
}

impl<R: Renderer> DashboardWidget<HttpContinentFetcher, R, TracingErrorSink> {
    /// Creates a widget querying the configured endpoint over HTTP.
    pub fn from_config(
        config: &DashboardConfig,
        context: HostContext,
        renderer: R,
    ) -> DashboardResult<Self> {
        let source = HttpContinentFetcher::from_config(config)?;
        Self::new(source, renderer, TracingErrorSink, config, context)
    }
}

impl<S, R, K> DashboardWidget<S, R, K>
where
    S: ContinentSource,
    R: Renderer,
    K: ErrorSink,
{
    pub fn new(
        source: S,
        renderer: R,
        sink: K,
        config: &DashboardConfig,
        context: HostContext,
    ) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self {
            source: Rc::new(source),
            inner: Rc::new(RefCell::new(WidgetInner {
                style: config.chart.clone(),
                context,
                state: WidgetState::Empty,
                series: ChartSeries::new(),
                renderer,
                sink,
                live_mount: None,
                mount_count: 0,
                last_transition_at: None,
            })),
        })
    }

    /// Mounts the widget and starts the one fetch of this mount.
    ///
    /// The greeting and an empty chart are drawn right away. The returned
    /// future performs the outbound call and applies its result.
    /// If [`stop`](Self::stop) runs first, the result is dropped and the
    /// future settles with [`FetchOutcome::Discarded`].
    pub fn start(&self) -> DashboardResult<impl Future<Output = FetchOutcome> + use<S, R, K>>
    where
        S: 'static,
        R: 'static,
        K: 'static,
    {
        let mount_id = {
            let mut inner = self.inner.borrow_mut();
            if inner.live_mount.is_some() {
                return Err(DashboardError::AlreadyMounted);
            }
            inner.mount_count += 1;
            let mount_id = inner.mount_count;
            inner.live_mount = Some(mount_id);
            inner.series.clear();
            inner.transition(WidgetState::Loading);
            inner.redraw();
            mount_id
        };

        let source = Rc::clone(&self.source);
        let inner = Rc::clone(&self.inner);
        Ok(async move {
            let result = source.fetch_continents().await;

            let mut inner = inner.borrow_mut();
            if inner.live_mount != Some(mount_id) {
                debug!(mount_id, "discarding continents result after unmount");
                return FetchOutcome::Discarded;
            }

            let series = result
                .map_err(DashboardError::from)
                .and_then(|raw| to_series(&raw).map_err(DashboardError::from));
            let outcome = match series {
                Ok(series) => {
                    let entries = series.len();
                    inner.series = series;
                    inner.transition(WidgetState::Ready);
                    FetchOutcome::Ready { entries }
                }
                Err(err) => {
                    inner.sink.record(&err);
                    inner.series.clear();
                    inner.transition(WidgetState::Failed);
                    FetchOutcome::Failed
                }
            };
            inner.redraw();
            outcome
        })
    }

    /// Unmounts the widget. Any pending fetch result is discarded and the
    /// series is dropped. Calling `stop` on an unmounted widget is a no-op.
    pub fn stop(&self) {
        self.inner.borrow_mut().unmount();
    }

    /// Replaces the host context and redraws if mounted. Never re-fetches.
    pub fn update_context(&self, context: HostContext) {
        let mut inner = self.inner.borrow_mut();
        trace!(embedded = context.has_embedding_context, "host context updated");
        inner.context = context;
        if inner.live_mount.is_some() {
            inner.redraw();
        }
    }

    /// Redraws with the current state, surfacing renderer failures.
    pub fn render(&self) -> DashboardResult<()> {
        let mut inner = self.inner.borrow_mut();
        let frame = inner.frame();
        inner.renderer.render(&frame)
    }

    /// Builds the frame for the current state without drawing it.
    #[must_use]
    pub fn frame(&self) -> DashboardFrame {
        self.inner.borrow().frame()
    }

    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.inner.borrow().state
    }

    #[must_use]
    pub fn series(&self) -> ChartSeries {
        self.inner.borrow().series.clone()
    }

    #[must_use]
    pub fn context(&self) -> HostContext {
        self.inner.borrow().context.clone()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().live_mount.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        let inner = self.inner.borrow();
        WidgetSnapshot {
            state: inner.state,
            series: inner.series.clone(),
            context: inner.context.clone(),
            mounted: inner.live_mount.is_some(),
            mount_count: inner.mount_count,
            last_transition_at: inner.last_transition_at,
        }
    }

    /// Runs `f` with shared access to the renderer.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.inner.borrow().renderer)
    }

    /// Runs `f` with shared access to the error sink.
    pub fn with_sink<T>(&self, f: impl FnOnce(&K) -> T) -> T {
        f(&self.inner.borrow().sink)
    }
}

impl<S, R, K> Drop for DashboardWidget<S, R, K> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.unmount();
        }
    }
}

impl<R, K> WidgetInner<R, K> {
    fn transition(&mut self, next: WidgetState) {
        debug!(
            from = ?self.state,
            to = ?next,
            mount = self.mount_count,
            entries = self.series.len(),
            "widget state transition"
        );
        self.state = next;
        self.last_transition_at = Some(Utc::now());
    }

    fn unmount(&mut self) {
        if self.live_mount.take().is_some() {
            self.series.clear();
            self.transition(WidgetState::Empty);
        }
    }

    fn frame(&self) -> DashboardFrame {
        DashboardFrame::build(&self.series, &self.context, &self.style)
    }
}

impl<R: Renderer, K> WidgetInner<R, K> {
    /// Automatic redraw; failures are logged and swallowed.
    fn redraw(&mut self) {
        let frame = self.frame();
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, state = ?self.state, "skipping failed redraw");
        }
    }
}
