use crate::config;
use crate::events::AppEvent;
use crate::gui::diagram::{self, State};
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use mecanum::Point;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub canvas_size: (i32, i32),
    pub drawing_area: gtk::DrawingArea,
    /// Installed only while the wheel spins.
    ticker: Option<gtk::TickCallbackId>,
}

impl AppModel {
    /// Installs or removes the frame-clock callback to match the spin speed.
    fn sync_ticker(&mut self, sender: &ComponentSender<Self>) {
        let animating = self.state.borrow().animating();
        match (animating, self.ticker.take()) {
            (true, None) => {
                let sender = sender.clone();
                let id = self.drawing_area.add_tick_callback(move |_, clock| {
                    sender.input(AppMsg::Tick(clock.frame_time()));
                    glib::ControlFlow::Continue
                });
                self.ticker = Some(id);
            }
            (true, Some(id)) => self.ticker = Some(id),
            (false, Some(id)) => id.remove(),
            (false, None) => {}
        }
    }
}

#[derive(Debug)]
pub enum AppMsg {
    DragBegin(Point),
    DragUpdate(Point),
    DragEnd,
    Tick(i64),
    Reset,
    Quit,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (State, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Mecanum wheel graph"),
            set_default_size: (model.canvas_size.0, model.canvas_size.1),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape || key == gtk::gdk::Key::q {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    if key == gtk::gdk::Key::r || key == gtk::gdk::Key::Home {
                        sender.input(AppMsg::Reset);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                set_content_width: model.canvas_size.0,
                set_content_height: model.canvas_size.1,

                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::DragBegin(Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::DragUpdate(Point::new(x, y).offset(dx, dy)));
                        }
                    },
                    connect_drag_end[sender] => move |_, _, _| {
                        sender.input(AppMsg::DragEnd);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, rx) = init;

        let canvas_size = (
            state.layout.canvas_width().ceil() as i32,
            state.layout.canvas_height.ceil() as i32,
        );

        let model = AppModel {
            state: Rc::new(RefCell::new(state)),
            canvas_size,
            drawing_area: gtk::DrawingArea::default(),
            ticker: None,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let theme = theme::from_context(&drawing_area.style_context());
                let mut state = state_draw.borrow_mut();
                state.resize(width as f64, height as f64);
                if let Err(e) = diagram::draw(cr, &mut state, &theme) {
                    log::error!("Drawing error: {}", e);
                }
            });

        model.sync_ticker(&sender);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragBegin(point) => self.state.borrow_mut().begin_drag(point),
            AppMsg::DragUpdate(point) => {
                let action = self.state.borrow_mut().drag_to(point);
                match action {
                    Ok(action) if action.should_redraw => self.drawing_area.queue_draw(),
                    Ok(_) => {}
                    Err(e) => log::error!("Failed to apply drag: {}", e),
                }
            }
            AppMsg::DragEnd => self.state.borrow_mut().end_drag(),
            AppMsg::Tick(frame_time) => {
                if self.state.borrow_mut().tick(frame_time) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Reset => {
                self.state.borrow_mut().selector.reset();
                self.drawing_area.queue_draw();
            }
            AppMsg::Quit => relm4::main_application().quit(),
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.state.borrow_mut().apply_config(&new_config);
                    self.sync_ticker(&sender);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
