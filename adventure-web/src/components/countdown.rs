use adventure_game::Countdown;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub countdown: Option<Countdown>,
}

/// Years and days left until graduation. Shows dashes until the level has
/// been entered.
#[function_component(GraduationCountdown)]
pub fn graduation_countdown(p: &Props) -> Html {
    let (years, days) = p.countdown.map_or_else(
        || (String::from("--"), String::from("--")),
        |c| (c.years.to_string(), c.days.to_string()),
    );
    html! {
        <div class="countdown" aria-label="Time until graduation">
            <div class="countdown__unit">
                <span id="years" class="countdown__value">{ years }</span>
                <span class="countdown__label">{"YEARS"}</span>
            </div>
            <div class="countdown__unit">
                <span id="days" class="countdown__value">{ days }</span>
                <span class="countdown__label">{"DAYS"}</span>
            </div>
        </div>
    }
}
