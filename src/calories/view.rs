use crate::calories::intent::CalorieIntent;
use crate::calories::state::{CalorieState, Entry};
use crate::calories::TITLE;
use crate::ui::markup::{button, div, h1, input, p, table, td, th, tr, Element, Node, Tone};

fn entry_row(entry: &Entry) -> Element<CalorieIntent> {
    tr([
        td([entry.meal_name.as_str()]),
        td([entry.calories.to_string()]),
        td([button("Delete")
            .tone(Tone::Danger)
            .on_click(CalorieIntent::Delete { id: entry.id })]),
    ])
    .key(entry.id)
}

pub fn view(state: &CalorieState) -> Node<CalorieIntent> {
    let header = tr([th("Meal Name"), th("Calories"), th("")]);
    let rows = std::iter::once(header).chain(state.entries.iter().map(entry_row));

    div([
        Node::from(h1(TITLE)),
        div([
            input()
                .key("meal")
                .placeholder("Enter meal name")
                .value(state.meal_draft.clone())
                .on_input(CalorieIntent::UpdateMeal),
            input()
                .key("calories")
                .placeholder("Enter calories number")
                .value(
                    state
                        .calorie_draft
                        .map(|calories| calories.to_string())
                        .unwrap_or_default(),
                )
                .numeric()
                .on_input(|value| CalorieIntent::UpdateCalories(value.trim().parse().ok())),
            button("Save")
                .tone(Tone::Primary)
                .on_click(CalorieIntent::Save),
        ])
        .into(),
        div([
            Node::from(table(rows)),
            p(format!("Total Calories: {}", state.total_calories)).into(),
        ])
        .into(),
    ])
    .into()
}
