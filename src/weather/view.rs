use crate::config::Units;
use crate::ui::markup::{button, div, h1, input, li, p, ul, Element, Node, Tone};
use crate::weather::intent::WeatherIntent;
use crate::weather::state::{Location, WeatherState};
use crate::weather::TITLE;

#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherView {
    units: Units,
}

impl WeatherView {
    pub fn new(units: Units) -> Self {
        Self { units }
    }

    fn location_item(&self, location: &Location) -> Element<WeatherIntent> {
        let symbol = self.units.symbol();
        li([
            p(format!("Location: {}", location.name)),
            p(format!("Current Temperature: {}{}", location.current_temp, symbol)),
            p(format!("Low Temperature: {}{}", location.min_temp, symbol)),
            p(format!("High Temperature: {}{}", location.max_temp, symbol)),
            button("Delete")
                .tone(Tone::Danger)
                .on_click(WeatherIntent::DeleteLocation { id: location.id }),
        ])
        .key(location.id)
    }

    pub fn render(&self, state: &WeatherState) -> Node<WeatherIntent> {
        let mut form: Vec<Node<WeatherIntent>> = vec![
            input()
                .key("location")
                .placeholder("Enter location")
                .value(state.location_input.clone())
                .on_input(WeatherIntent::UpdateLocationInput)
                .into(),
            button("Add")
                .tone(Tone::Primary)
                .on_click(WeatherIntent::AddLocation)
                .into(),
        ];
        if let Some(error) = &state.error {
            form.push(p(error.clone()).tone(Tone::Danger).into());
        }

        let items = state
            .locations
            .iter()
            .map(|location| self.location_item(location));

        div([
            Node::from(h1(TITLE)),
            div(form).into(),
            div([ul(items)]).into(),
        ])
        .into()
    }
}
