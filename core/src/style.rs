use colored::Colorize;

use crate::action::TestVerdict;

/// One summary line after a full run. Tests whose fixtures could not be
/// fetched are counted apart from wrong answers.
pub fn print_test_summary(verdicts: &[TestVerdict], num_attempted: usize) {
    let bar = "-".repeat(5);
    print!("{} ", bar);

    let num_passed = verdicts.iter().filter(|v| v.passed).count();
    let num_failed = verdicts.len() - num_passed;
    let num_unavailable = num_attempted - verdicts.len();

    if num_unavailable == num_attempted {
        let msg = format!("Nenhum dos {} testes está disponível", num_attempted);
        print!("{}", msg.yellow());
    } else if num_failed == 0 && num_unavailable == 0 {
        let msg = format!("Todos os {} testes passaram ✨", num_attempted);
        print!("{}", msg.green());
    } else if num_failed == 0 {
        print!(
            "{} {}",
            format!("Os {} testes disponíveis passaram ✨", num_passed).green(),
            format!("({} indisponíveis)", num_unavailable).dimmed(),
        );
    } else {
        let num_run = num_passed + num_failed;
        let summary_msg = if num_passed > 0 {
            format!("{}/{} testes falharam 💣", num_failed, num_run)
        } else {
            format!("Todos os {} testes falharam 💀", num_run)
        };

        if num_unavailable > 0 {
            print!(
                "{} {}",
                summary_msg.bright_red(),
                format!("({} indisponíveis)", num_unavailable).dimmed(),
            );
        } else {
            print!("{}", summary_msg.bright_red());
        }
    }

    println!(" {}", bar);
}
