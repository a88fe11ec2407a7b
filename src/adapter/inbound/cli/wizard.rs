//! Four-step configuration wizard.

use std::io::{BufRead, Write};

use crate::domain::{Build, Model, Paint, SelfDriving, Selection, Wheels};
use crate::error::Result;

use super::input::LineReader;
use super::output::Output;

/// Present one step and map the answer onto its selection.
///
/// Returns `Ok(None)` if input ends before an answer arrives.
fn ask<S, R, W>(input: &mut LineReader<R>, output: &mut Output<W>) -> Result<Option<S>>
where
    S: Selection,
    R: BufRead,
    W: Write,
{
    output.step(S::TITLE, &S::OPTIONS)?;
    Ok(input
        .read_choice()?
        .map(|choice| S::from_choice(choice.number())))
}

/// Walk the model, paint, wheels and self-driving steps in order.
///
/// Returns `Ok(None)` if input ends part way; nothing chosen so far is kept.
pub fn run<R: BufRead, W: Write>(
    input: &mut LineReader<R>,
    output: &mut Output<W>,
) -> Result<Option<Build>> {
    let Some(model) = ask::<Model, _, _>(input, output)? else {
        return Ok(None);
    };
    let Some(paint) = ask::<Paint, _, _>(input, output)? else {
        return Ok(None);
    };
    let Some(wheels) = ask::<Wheels, _, _>(input, output)? else {
        return Ok(None);
    };
    let Some(self_driving) = ask::<SelfDriving, _, _>(input, output)? else {
        return Ok(None);
    };

    Ok(Some(
        Build::new(model)
            .with_paint(paint)
            .with_wheels(wheels)
            .with_self_driving(self_driving),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::cli::output::OutputConfig;
    use crate::domain::Configuration;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn wizard(script: &str) -> (Option<Build>, String) {
        let mut input = LineReader::new(Cursor::new(script.as_bytes().to_vec()));
        let mut output = Output::new(Vec::new(), OutputConfig::default());
        let build = run(&mut input, &mut output).unwrap();
        (build, String::from_utf8(output.into_inner()).unwrap())
    }

    #[test]
    fn all_upgrades_on_model_3() {
        let (build, _) = wizard("1\n2\n2\n2\n");
        let config = Configuration::from(build.unwrap());
        assert_eq!(config.description(), "Model 3 - LR - Ultra Red - 19\" Nova (FSD)");
        assert_eq!(config.price(), dec!(59240));
    }

    #[test]
    fn defaults_on_model_y() {
        let (build, _) = wizard("2\n1\n1\n1\n");
        let config = Configuration::from(build.unwrap());
        assert_eq!(config.description(), "Model Y - LR");
        assert_eq!(config.price(), dec!(50490));
    }

    #[test]
    fn unrecognised_model_answer_selects_model_y() {
        let (build, _) = wizard("7\n1\n1\n1\n");
        assert_eq!(build.unwrap().model, Model::ModelYLongRange);

        let (build, _) = wizard("abc\n1\n1\n1\n");
        assert_eq!(build.unwrap().model, Model::ModelYLongRange);
    }

    #[test]
    fn non_numeric_addon_answers_take_the_default() {
        let (build, _) = wizard("1\nred\n9\nyes\n");
        let build = build.unwrap();
        assert_eq!(build.paint, Paint::StealthGrey);
        assert_eq!(build.wheels, Wheels::Photon18);
        assert_eq!(build.self_driving, SelfDriving::Excluded);
    }

    #[test]
    fn every_step_is_shown_in_order() {
        let (_, text) = wizard("1\n1\n1\n1\n");
        let positions: Vec<usize> = [
            Model::TITLE,
            Paint::TITLE,
            Wheels::TITLE,
            SelfDriving::TITLE,
        ]
        .iter()
        .map(|title| text.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn eof_mid_wizard_yields_nothing() {
        let (build, text) = wizard("1\n2\n");
        assert!(build.is_none());
        assert!(text.contains(Wheels::TITLE));
        assert!(!text.contains(SelfDriving::TITLE));
    }
}
