//! WebAssembly entry point: builds the page and wires browser events.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use sketchpad_core::{PointerEvent, SketchpadConfig};
use sketchpad_render::Canvas2dSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, Document, HtmlAnchorElement, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

use crate::app::{App, PlatformRequest};
use crate::error::{ShellError, ShellResult};
use crate::shortcuts::ShortcutRegistry;
use crate::ui::{Panel, ToolbarButton, UiAction};

const STYLE: &str = "
.sketch-container { display: flex; gap: 12px; align-items: flex-start; }
.left-buttons, .right-buttons { display: flex; flex-direction: column; gap: 6px; }
.sketchpad { border: 1px solid #444; cursor: none; background: #fff; }
.sticker-button { font-size: 24px; }
";

impl From<JsValue> for ShellError {
    fn from(value: JsValue) -> Self {
        ShellError::Dom(format!("{:?}", value))
    }
}

struct Shell {
    app: App,
    surface: Canvas2dSurface,
    document: Document,
    left: HtmlElement,
    right: HtmlElement,
}

impl Shell {
    fn panel(&self, panel: Panel) -> HtmlElement {
        match panel {
            Panel::Left => self.left.clone(),
            Panel::Right => self.right.clone(),
        }
    }

    fn refresh(&mut self) {
        self.app.redraw_if_needed(&mut self.surface);
    }
}

fn create<T: JsCast>(document: &Document, tag: &str) -> ShellResult<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| ShellError::Dom(format!("<{}> has an unexpected type", tag)))
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    log::info!("Starting sketchpad (WASM)");
    ShortcutRegistry::log_all();

    start(SketchpadConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn start(config: SketchpadConfig) -> ShellResult<()> {
    let window = web_sys::window().ok_or(ShellError::NoWindow)?;
    let document = window.document().ok_or(ShellError::NoDocument)?;
    let body = document.body().ok_or(ShellError::NoBody)?;

    let style: HtmlElement = create(&document, "style")?;
    style.set_text_content(Some(STYLE));
    body.append_child(&style)?;

    let header: HtmlElement = create(&document, "h1")?;
    header.set_class_name("header");
    header.set_text_content(Some(&config.title));
    body.append_child(&header)?;

    let container: HtmlElement = create(&document, "div")?;
    container.set_class_name("sketch-container");
    let left: HtmlElement = create(&document, "div")?;
    left.set_class_name("left-buttons");
    let right: HtmlElement = create(&document, "div")?;
    right.set_class_name("right-buttons");

    let canvas: HtmlCanvasElement = create(&document, "canvas")?;
    canvas.set_class_name("sketchpad");
    canvas.set_width(config.canvas_width);
    canvas.set_height(config.canvas_height);

    container.append_child(&left)?;
    container.append_child(&canvas)?;
    container.append_child(&right)?;
    body.append_child(&container)?;

    let surface = Canvas2dSurface::from_canvas(&canvas)?;
    let app = App::new(config);
    let buttons = app.toolbar();

    let shell = Rc::new(RefCell::new(Shell {
        app,
        surface,
        document: document.clone(),
        left,
        right,
    }));

    for button in buttons {
        add_button(&shell, button)?;
    }

    wire_pointer(&shell, &canvas, &document)?;
    wire_keyboard(&shell, &document)?;

    log::info!("Sketchpad ready");
    Ok(())
}

fn add_button(shell: &Rc<RefCell<Shell>>, button: ToolbarButton) -> ShellResult<()> {
    let (document, parent) = {
        let s = shell.borrow();
        (s.document.clone(), s.panel(button.panel))
    };

    let element: HtmlElement = create(&document, "button")?;
    element.set_text_content(Some(&button.label));
    if button.is_sticker {
        element.class_list().add_1("sticker-button")?;
    }

    let action = button.action;
    let handler_shell = Rc::clone(shell);
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        if let Err(e) = run_action(&handler_shell, &action) {
            log::error!("Action {:?} failed: {}", action, e);
        }
    });
    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    parent.append_child(&element)?;
    Ok(())
}

fn run_action(shell: &Rc<RefCell<Shell>>, action: &UiAction) -> ShellResult<()> {
    let request = {
        let mut s = shell.borrow_mut();
        let request = s.app.dispatch(action);
        s.refresh();
        request
    };

    match request {
        Some(PlatformRequest::PromptCustomSticker { message, default }) => {
            let window = web_sys::window().ok_or(ShellError::NoWindow)?;
            let input = window.prompt_with_message_and_default(message, default)?;
            let button = shell.borrow_mut().app.add_custom_sticker(input.as_deref());
            if let Some(button) = button {
                add_button(shell, button)?;
            }
        }
        Some(PlatformRequest::Export) => export(&shell.borrow())?,
        None => {}
    }
    Ok(())
}

fn pointer_event(kind: &str, position: Point) -> Option<PointerEvent> {
    Some(match kind {
        "mousedown" => PointerEvent::Down { position },
        "mousemove" => PointerEvent::Move { position },
        "mouseenter" => PointerEvent::Enter { position },
        "mouseleave" => PointerEvent::Leave { position },
        _ => return None,
    })
}

fn wire_pointer(shell: &Rc<RefCell<Shell>>, canvas: &HtmlCanvasElement, document: &Document) -> ShellResult<()> {
    for kind in ["mousedown", "mousemove", "mouseenter", "mouseleave"] {
        let handler_shell = Rc::clone(shell);
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let position = Point::new(event.offset_x() as f64, event.offset_y() as f64);
            if let Some(pointer) = pointer_event(kind, position) {
                let mut s = handler_shell.borrow_mut();
                s.app.handle_pointer(pointer);
                s.refresh();
            }
        });
        canvas.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }

    // Releases outside the canvas must still end the drag.
    let handler_shell = Rc::clone(shell);
    let target = canvas.clone();
    let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let position = Point::new(event.client_x() as f64 - rect.left(), event.client_y() as f64 - rect.top());
        let mut s = handler_shell.borrow_mut();
        s.app.handle_pointer(PointerEvent::Up { position });
        s.refresh();
    });
    document.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();
    Ok(())
}

fn wire_keyboard(shell: &Rc<RefCell<Shell>>, document: &Document) -> ShellResult<()> {
    let handler_shell = Rc::clone(shell);
    let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let ctrl = event.ctrl_key() || event.meta_key();
        if let Some(action) = ShortcutRegistry::resolve(&event.key(), ctrl, event.shift_key()) {
            event.prevent_default();
            if let Err(e) = run_action(&handler_shell, &action) {
                log::error!("Shortcut {:?} failed: {}", action, e);
            }
        }
    });
    document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

/// Paint an offscreen canvas at export size and download it as PNG.
fn export(shell: &Shell) -> ShellResult<()> {
    let config = &shell.app.config().export;
    let canvas: HtmlCanvasElement = create(&shell.document, "canvas")?;
    canvas.set_width(config.width);
    canvas.set_height(config.height);

    let mut surface = Canvas2dSurface::from_canvas(&canvas)?;
    shell.app.export(&mut surface);

    let document = shell.document.clone();
    let file_name = config.file_name.clone();
    let on_blob = Closure::once_into_js(move |blob: Option<Blob>| {
        let Some(blob) = blob else {
            log::warn!("Export produced no image data");
            return;
        };
        if let Err(e) = download_blob(&document, &blob, &file_name) {
            log::error!("Failed to download {}: {}", file_name, e);
        }
    });
    canvas.to_blob(on_blob.unchecked_ref::<js_sys::Function>())?;
    Ok(())
}

fn download_blob(document: &Document, blob: &Blob, file_name: &str) -> ShellResult<()> {
    let url = web_sys::Url::create_object_url_with_blob(blob)?;

    let a: HtmlAnchorElement = create(document, "a")?;
    a.set_href(&url);
    a.set_download(file_name);
    a.click();

    web_sys::Url::revoke_object_url(&url)?;
    log::info!("Downloaded {}", file_name);
    Ok(())
}
