//! Draws the bus network as an SVG map.

use tracing::debug;

use crate::catalogue::Catalogue;
use crate::domain::{Bus, Coordinates, Stop, StopId};

use super::settings::{RenderSettings, RenderSettingsError};
use super::svg::{
    Circle, Color, Document, Painted, Point, Polyline, StrokeLineCap, StrokeLineJoin, Text,
};

const EPSILON: f64 = 1e-6;

const FONT_FAMILY: &str = "Verdana";

/// Projects coordinates onto the canvas.
///
/// The bounding box of the input points is scaled uniformly to fit inside
/// the canvas minus padding; north is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(
        points: impl IntoIterator<Item = Coordinates>,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self {
                padding,
                min_lng: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        };

        let (mut min_lat, mut max_lat) = (first.lat(), first.lat());
        let (mut min_lng, mut max_lng) = (first.lng(), first.lng());
        for p in points {
            min_lat = min_lat.min(p.lat());
            max_lat = max_lat.max(p.lat());
            min_lng = min_lng.min(p.lng());
            max_lng = max_lng.max(p.lng());
        }

        let width_zoom = (max_lng - min_lng > EPSILON)
            .then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom = (max_lat - min_lat > EPSILON)
            .then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lng,
            max_lat,
            zoom,
        }
    }

    pub fn project(&self, coordinates: Coordinates) -> Point {
        Point::new(
            (coordinates.lng() - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - coordinates.lat()) * self.zoom + self.padding,
        )
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

/// Renders a catalogue into an SVG document.
///
/// Layers, bottom to top: route lines, bus labels, stop circles, stop labels.
/// Only non-empty buses and the stops they serve are drawn.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Result<Self, RenderSettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn render(&self, catalogue: &Catalogue) -> Document {
        let buses: Vec<&Bus> = catalogue.all_buses().filter(|bus| !bus.is_empty()).collect();
        let stops: Vec<&Stop> = catalogue
            .all_stops()
            .filter(|stop| catalogue.is_served(stop.id()))
            .collect();

        let projector = SphereProjector::new(
            stops.iter().map(|stop| stop.coordinates()),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );
        let at = |id: StopId| {
            catalogue
                .stop_by_id(id)
                .map(|stop| projector.project(stop.coordinates()))
        };

        let mut doc = Document::new();
        self.route_lines(&mut doc, &buses, &at);
        self.bus_labels(&mut doc, &buses, &at);
        self.stop_circles(&mut doc, &stops, &projector);
        self.stop_labels(&mut doc, &stops, &projector);

        debug!(
            buses = buses.len(),
            stops = stops.len(),
            elements = doc.len(),
            "rendered map"
        );
        doc
    }

    fn route_lines(&self, doc: &mut Document, buses: &[&Bus], at: &impl Fn(StopId) -> Option<Point>) {
        for (index, bus) in buses.iter().enumerate() {
            let line = bus
                .full_route()
                .into_iter()
                .filter_map(at)
                .collect::<Polyline>()
                .stroke(self.settings.route_color(index))
                .fill(Color::None)
                .stroke_width(self.settings.line_width)
                .line_cap(StrokeLineCap::Round)
                .line_join(StrokeLineJoin::Round);
            doc.add(line);
        }
    }

    fn bus_labels(&self, doc: &mut Document, buses: &[&Bus], at: &impl Fn(StopId) -> Option<Point>) {
        for (index, bus) in buses.iter().enumerate() {
            let color = self.settings.route_color(index);
            let mut ends: Vec<StopId> = bus.first_stop().into_iter().collect();
            if bus.is_line()
                && let Some(last) = bus.last_stop()
                && bus.first_stop() != Some(last)
            {
                ends.push(last);
            }

            for position in ends.into_iter().filter_map(at) {
                let label = Text::new(bus.name())
                    .position(position)
                    .offset(self.settings.bus_label_offset)
                    .font_size(self.settings.bus_label_font_size)
                    .font_family(FONT_FAMILY)
                    .font_weight("bold");
                doc.add(self.underlayer(label.clone()));
                doc.add(label.fill(color.clone()));
            }
        }
    }

    fn stop_circles(&self, doc: &mut Document, stops: &[&Stop], projector: &SphereProjector) {
        doc.extend(stops.iter().map(|stop| {
            Circle::new(projector.project(stop.coordinates()), self.settings.stop_radius)
                .fill("white")
        }));
    }

    fn stop_labels(&self, doc: &mut Document, stops: &[&Stop], projector: &SphereProjector) {
        for stop in stops {
            let label = Text::new(stop.name())
                .position(projector.project(stop.coordinates()))
                .offset(self.settings.stop_label_offset)
                .font_size(self.settings.stop_label_font_size)
                .font_family(FONT_FAMILY);
            doc.add(self.underlayer(label.clone()));
            doc.add(label.fill("black"));
        }
    }

    /// Halo drawn under a label to keep it readable over route lines.
    fn underlayer(&self, text: Text) -> Text {
        text.fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round)
    }
}
