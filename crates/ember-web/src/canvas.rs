//! `Painter` over a Canvas2D context.

use ember_core::{Composite, Painter, RadialGradient, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    composite: Option<Composite>,
    // Grain issues thousands of fills per frame with one color; skip
    // re-formatting and re-setting the style when it has not changed.
    fill_css: Option<(Rgba, JsValue)>,
}

impl CanvasPainter {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            composite: None,
            fill_css: None,
        })
    }

    fn gradient(&self, g: &RadialGradient) -> Option<web::CanvasGradient> {
        let (x, y, r) = (g.center.x as f64, g.center.y as f64, g.radius.max(0.0) as f64);
        let grad = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r).ok()?;
        for stop in &g.stops {
            let _ = grad.add_color_stop(stop.offset, &stop.color.to_string());
        }
        Some(grad)
    }

    #[allow(deprecated)]
    fn set_fill_color(&mut self, color: Rgba) {
        if let Some((cached, _)) = &self.fill_css {
            if *cached == color {
                return;
            }
        }
        let css = JsValue::from_str(&color.to_string());
        self.ctx.set_fill_style(&css);
        self.fill_css = Some((color, css));
    }

    #[allow(deprecated)]
    fn set_fill_gradient(&mut self, grad: web::CanvasGradient) {
        self.ctx.set_fill_style(&JsValue::from(grad));
        self.fill_css = None;
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn set_composite(&mut self, mode: Composite) {
        if self.composite == Some(mode) {
            return;
        }
        let _ = self.ctx.set_global_composite_operation(mode.as_css());
        self.composite = Some(mode);
    }

    fn fill_gradient_rect(&mut self, gradient: &RadialGradient, origin: Vec2, size: Vec2) {
        if let Some(grad) = self.gradient(gradient) {
            self.set_fill_gradient(grad);
            self.ctx
                .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        }
    }

    fn fill_gradient_circle(&mut self, gradient: &RadialGradient) {
        if let Some(grad) = self.gradient(gradient) {
            self.set_fill_gradient(grad);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                gradient.center.x as f64,
                gradient.center.y as f64,
                gradient.radius.max(0.0) as f64,
                0.0,
                TAU,
            );
            self.ctx.fill();
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.set_fill_color(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.set_fill_color(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx
            .set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}
