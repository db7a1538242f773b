use crate::infra::footprint_service;
use carbon_footprint::config::AppConfig;
use carbon_footprint::error::AppError;
use carbon_footprint::quiz::{
    AnswerSet, Locale, QuizCatalog, QuizResult, QuizSession, SessionError, Step,
};
use clap::Args;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Quiz language (en or id)
    #[arg(long, default_value = "en")]
    pub(crate) locale: Locale,
    /// Skip the language-model call and use the static recommendations
    #[arg(long)]
    pub(crate) offline: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Quiz language (en or id)
    #[arg(long, default_value = "en")]
    pub(crate) locale: Locale,
    /// Five option values in question order, e.g. never,car,daily,none,weekly
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    pub(crate) answers: Vec<String>,
    /// Name shown on the result
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Skip the language-model call and use the static recommendations
    #[arg(long)]
    pub(crate) offline: bool,
}

pub(crate) async fn run_interactive_quiz(args: QuizArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = footprint_service(&config.enrichment, args.offline)?;

    let mut session = QuizSession::new(args.locale);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    collect_answers(&mut session, stdin.lock(), &mut stdout)?;

    writeln!(stdout, "\n{}", session.catalog().strings.calculating)?;
    let result = service.complete_session(&mut session).await?;
    render_result(&mut stdout, session.catalog(), session.name(), &result)?;
    Ok(())
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = footprint_service(&config.enrichment, args.offline)?;

    let answers = AnswerSet::from_ordered(args.answers)?;
    let result = service.calculate(&answers, args.locale).await?;

    let mut stdout = io::stdout();
    let name = args.name.unwrap_or_default();
    render_result(
        &mut stdout,
        carbon_footprint::quiz::catalog(args.locale),
        &name,
        &result,
    )?;
    Ok(())
}

/// Walks the session from the name step to the results step, reading one line
/// per prompt. Options are picked by number or by value; `b` goes back.
pub(crate) fn collect_answers<R, W>(
    session: &mut QuizSession,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let strings = session.catalog().strings;
    writeln!(output, "{}", strings.title)?;

    while session.step() != Step::Results {
        writeln!(output, "\n[{:>3}%]", session.progress_percent())?;

        match session.current_question() {
            None => {
                writeln!(output, "{}", strings.name_prompt)?;
                let line = read_line(&mut input)?;
                session.set_name(line.trim());
                if let Err(err) = session.advance() {
                    writeln!(output, "{err}")?;
                }
            }
            Some(question) => {
                writeln!(output, "{}", question.prompt)?;
                for (position, option) in question.options.iter().enumerate() {
                    writeln!(output, "  {}) {}", position + 1, option.label)?;
                }
                if question.index > 0 {
                    writeln!(output, "  b) {}", strings.previous)?;
                }

                let line = read_line(&mut input)?;
                let choice = line.trim();
                if choice.eq_ignore_ascii_case("b") {
                    session.back();
                    continue;
                }

                let value = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|number| number.checked_sub(1))
                    .and_then(|position| question.options.get(position))
                    .map(|option| option.value)
                    .unwrap_or(choice);

                match session.answer(value) {
                    Ok(_) => {}
                    Err(err @ SessionError::UnknownOption { .. }) => writeln!(output, "{err}")?,
                    Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidInput, err)),
                }
            }
        }
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the quiz was finished",
        ));
    }
    Ok(line)
}

pub(crate) fn render_result<W: Write>(
    output: &mut W,
    catalog: &QuizCatalog,
    name: &str,
    result: &QuizResult,
) -> io::Result<()> {
    let labels = catalog.strings.results;

    writeln!(output, "\n{}", labels.title)?;
    if !name.trim().is_empty() {
        writeln!(output, "{}: {}", labels.name, name.trim())?;
    }
    writeln!(output, "{}: {}/100", labels.impact_score, result.score())?;
    writeln!(output, "{}: {}", labels.summary, result.summary())?;
    writeln!(output, "{}: {}", labels.environmental_impact, result.impact())?;
    writeln!(output, "{}:", labels.recommendations)?;
    for recommendation in result.recommendations() {
        writeln!(output, "  - {recommendation}")?;
    }
    Ok(())
}
