use crate::core::{
    FrameLoop, HoverEffectConfig, HoverEffectState, LeaveAction, Lifecycle, Source, TickOutcome,
    TrackTarget,
};
use crate::dom;
use crate::frame::{Ticker, TickerRegistry};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One running instance of an interpolated hover effect.
///
/// Pointer events only update the sampled target; every style write happens
/// in the frame tick.
pub struct HoverEffect {
    config: Rc<HoverEffectConfig>,
    state: Rc<RefCell<HoverEffectState>>,
    source: Option<web::HtmlElement>,
    ticker: Rc<Ticker>,
}

impl HoverEffect {
    fn new(
        document: &web::Document,
        config: Rc<HoverEffectConfig>,
        source: Option<web::HtmlElement>,
    ) -> Option<Rc<Self>> {
        let mut targets = Vec::with_capacity(config.tracks.len());
        for track in &config.tracks {
            let el = match track.target {
                TrackTarget::SourceElement => source.clone(),
                TrackTarget::Selector(sel) => dom::query(document, sel),
            };
            let Some(el) = el else {
                log::debug!("[fx] {}: missing target {:?}", config.name, track.target);
                return None;
            };
            targets.push(el);
        }

        let state = Rc::new(RefCell::new(HoverEffectState::new(&config)));
        let state_tick = state.clone();
        let config_tick = config.clone();
        let ticker = Ticker::new(config.name, move || {
            let mut state = state_tick.borrow_mut();
            let outcome = state.tick();
            if outcome == TickOutcome::Stop {
                return false;
            }
            for (el, (_, styles)) in targets.iter().zip(state.track_styles(&config_tick)) {
                dom::apply_styles(el, &styles);
            }
            if outcome == TickOutcome::Settled {
                for el in &targets {
                    dom::apply_static_styles(el, config_tick.settled_styles);
                }
                return false;
            }
            true
        });

        Some(Rc::new(Self {
            config,
            state,
            source,
            ticker,
        }))
    }

    pub fn start(&self) {
        self.ticker.start();
    }

    pub fn stop(&self) {
        self.ticker.stop();
    }

    fn wire(self: &Rc<Self>, document: &web::Document) {
        let this = self.clone();
        let on_move = move |ev: web::MouseEvent| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let rect = this.source.as_ref().map(|el| dom::rect_of(el));
            this.state.borrow_mut().on_move(client, rect);
        };
        match &self.source {
            Some(el) => dom::listen(el, "mousemove", on_move),
            None => dom::listen(document, "mousemove", on_move),
        }

        let Some(source) = self.source.clone() else {
            return;
        };
        if self.config.lifecycle == Lifecycle::Continuous {
            return;
        }

        let this = self.clone();
        dom::listen(&source, "mouseenter", move |_: web::MouseEvent| {
            if let Some(el) = &this.source {
                dom::apply_static_styles(el, this.config.enter_styles);
            }
            if this.state.borrow_mut().on_enter() {
                this.start();
            }
        });

        let this = self.clone();
        dom::listen(&source, "mouseleave", move |_: web::MouseEvent| {
            let action = this.state.borrow_mut().on_leave();
            match action {
                LeaveAction::None => {}
                LeaveAction::Stop => this.stop(),
                LeaveAction::Settle => this.start(),
            }
            if let Some(el) = &this.source {
                dom::apply_static_styles(el, this.config.leave_styles);
            }
        });
    }
}

/// Build and wire every instance of `config` on the page. Returns the count.
pub fn mount(
    document: &web::Document,
    config: HoverEffectConfig,
    registry: &TickerRegistry,
) -> usize {
    let config = Rc::new(config);
    let sources: Vec<Option<web::HtmlElement>> = match config.source {
        Source::Document => vec![None],
        Source::Each(selector) => dom::query_all(document, selector)
            .into_iter()
            .map(Some)
            .collect(),
    };

    let mut mounted = 0;
    for source in sources {
        let Some(effect) = HoverEffect::new(document, config.clone(), source) else {
            continue;
        };
        effect.wire(document);
        match config.lifecycle {
            Lifecycle::Continuous => {
                effect.start();
                registry.add_continuous(effect.ticker.clone());
            }
            Lifecycle::WhileHovering { .. } => registry.add_on_demand(effect.ticker.clone()),
        }
        mounted += 1;
    }
    log::info!("[fx] {} mounted x{}", config.name, mounted);
    mounted
}
