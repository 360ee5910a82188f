//! Report command implementation.
//!
//! The `fitform report` command submits the form: required fields are
//! validated first, and only a complete form is turned into a BMI and
//! calorie report.

use serde::Serialize;

use crate::cli::args::ReportArgs;
use crate::config::FitformConfig;
use crate::error::{FitformError, Result};
use crate::form::{submit, FieldId, FormValues, Submission};
use crate::meals::{select_meals, MealPlan};
use crate::metrics::{ActivityLevel, BodyProfile, Gender, MetricsReport};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::show_meal_plan;

/// The report command implementation.
pub struct ReportCommand {
    args: ReportArgs,
    config: FitformConfig,
}

/// Everything a submitted report prints in JSON mode.
#[derive(Debug, Serialize)]
struct ReportOutput {
    #[serde(flatten)]
    report: MetricsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    meal_plan: Option<MealPlan>,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(args: ReportArgs, config: FitformConfig) -> Self {
        Self { args, config }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ReportArgs {
        &self.args
    }

    /// Form values from flags, asking for the rest when `--prompt` is set.
    fn collect_values(&self, ui: &mut dyn UserInterface) -> Result<FormValues> {
        let mut values = self.args.fields.to_values();
        if !self.args.prompt {
            return Ok(values);
        }

        let given = [
            self.args.fields.age.is_some(),
            self.args.fields.weight.is_some(),
            self.args.fields.height.is_some(),
        ];
        for (field, was_given) in FieldId::ALL.into_iter().zip(given) {
            if was_given {
                continue;
            }
            let answer = ui.prompt(&Prompt::input(field.id(), field.question()))?;
            values.set(field, answer);
        }
        Ok(values)
    }

    /// Gender from `--gender`, a select prompt, or the default.
    fn resolve_gender(&self, ui: &mut dyn UserInterface) -> Result<Gender> {
        if let Some(gender) = self.args.gender {
            return Ok(gender);
        }
        if !self.args.prompt {
            return Ok(Gender::Male);
        }

        let options = Gender::ALL
            .iter()
            .map(|g| PromptOption::new(g.label(), g.id()))
            .collect();
        let answer = ui.prompt(&Prompt::select(
            "gender",
            "Gender",
            options,
            Gender::Male.id(),
        ))?;
        answer.parse().map_err(|reason| invalid_choice("Gender", &answer, reason))
    }

    /// Activity level from `--activity`, a select prompt, or the default.
    fn resolve_activity(&self, ui: &mut dyn UserInterface) -> Result<ActivityLevel> {
        if let Some(activity) = self.args.activity {
            return Ok(activity);
        }
        if !self.args.prompt {
            return Ok(ActivityLevel::Sedentary);
        }

        let options = ActivityLevel::ALL
            .iter()
            .map(|a| PromptOption::new(a.label(), a.id()))
            .collect();
        let answer = ui.prompt(&Prompt::select(
            "activity",
            "Activity level",
            options,
            ActivityLevel::Sedentary.id(),
        ))?;
        answer
            .parse()
            .map_err(|reason| invalid_choice("Activity", &answer, reason))
    }

    fn build_output(
        &self,
        values: &FormValues,
        gender: Gender,
        activity: ActivityLevel,
    ) -> Result<ReportOutput> {
        let profile =
            BodyProfile::from_form(values, gender, activity, self.args.bodyfat.as_deref())?;
        let report = MetricsReport::from_profile(profile);

        let meal_plan = self.args.meals.then(|| {
            select_meals(
                &self.config.meal_catalog(),
                f64::from(report.daily_calories),
                &mut rand::thread_rng(),
            )
        });

        Ok(ReportOutput { report, meal_plan })
    }

    fn render(&self, output: &ReportOutput, ui: &mut dyn UserInterface) -> Result<()> {
        if self.args.json {
            let json =
                serde_json::to_string_pretty(output).map_err(|e| FitformError::Other(e.into()))?;
            ui.output(&json);
            return Ok(());
        }

        ui.show_header("Body metrics");
        if ui.output_mode().shows_details() {
            for line in output.report.detail_lines() {
                ui.message(&format!("  {}", line));
            }
            ui.message("");
        }
        for line in output.report.lines() {
            ui.message(&format!("  {}", line));
        }
        if let Some(plan) = &output.meal_plan {
            ui.message("");
            show_meal_plan(plan, ui);
        }
        Ok(())
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let values = self.collect_values(ui)?;
        let gender = self.resolve_gender(ui)?;
        let activity = self.resolve_activity(ui)?;

        match submit(&values, ui, |values, _| {
            self.build_output(values, gender, activity)
        })? {
            Submission::Submitted(output) => {
                self.render(&output, ui)?;
                Ok(CommandResult::success())
            }
            Submission::Blocked { .. } => Ok(CommandResult::failure(1)),
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.run(ui) {
            Err(e @ FitformError::InvalidFieldValue { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            other => other,
        }
    }
}

fn invalid_choice(field: &str, answer: &str, reason: String) -> FitformError {
    FitformError::InvalidFieldValue {
        field: field.to_string(),
        value: answer.to_string(),
        reason,
    }
}
