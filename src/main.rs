use std::io::{self, BufRead, Write};

use mealplan::{GoogleProvider, Phase, PlannerConfig, PlannerError, PlannerSession, render};

#[tokio::main]
async fn main() -> Result<(), PlannerError> {
    env_logger::init();

    let config = PlannerConfig::load()?;
    let provider = GoogleProvider::new(&config)?;
    let mut session = PlannerSession::new(provider);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", render::render_welcome());
    loop {
        if let Some(message) = &session.state.error {
            println!("出错了：{message}");
        }

        print!("> ");
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let input = line.trim();
        if input == "q" {
            break;
        }

        match session.state.phase {
            Phase::Welcome => {
                println!("{}", mealplan::session::MSG_LOADING_RECOMMENDATIONS);
                session.start().await;
                if session.state.phase == Phase::Selection {
                    println!("{}", render::render_selection(&session.state));
                }
            }
            Phase::Selection => match input {
                "r" => {
                    println!("{}", mealplan::session::MSG_LOADING_RECOMMENDATIONS);
                    session.refresh().await;
                    println!("{}", render::render_selection(&session.state));
                }
                "go" => {
                    if session.state.selected.is_empty() {
                        println!("请先至少选择 1 道菜。");
                        continue;
                    }
                    println!("{}", mealplan::session::MSG_LOADING_PLAN);
                    session.confirm_selection().await;
                    if session.state.phase == Phase::Dashboard {
                        print_dashboard(&session);
                    }
                }
                _ => {
                    if let Some(id) = dish_id_for_input(&session, input) {
                        session.toggle_dish(&id);
                        println!("{}", render::render_selection(&session.state));
                    } else {
                        println!("无法识别的输入：{input}");
                    }
                }
            },
            Phase::Planning => {
                // Unreachable interactively; stages complete before prompting
            }
            Phase::Dashboard => match input {
                "1" => println!("{}", render::render_plan(&session.state.plan)),
                "2" => println!(
                    "{}",
                    render::render_shopping_list(&session.state.shopping_list)
                ),
                "3" => println!("{}", render::render_recipes(&session.state.recipes)),
                "restart" => {
                    session.restart();
                    println!("{}", render::render_selection(&session.state));
                }
                _ => println!("输入 1 查看安排，2 查看购物清单，3 查看食谱，restart 重新开始，q 退出。"),
            },
        }
    }

    Ok(())
}

fn print_dashboard(session: &PlannerSession<GoogleProvider>) {
    println!("{}", render::render_plan(&session.state.plan));
    println!("{}", render::render_shopping_list(&session.state.shopping_list));
    println!("{}", render::render_recipes(&session.state.recipes));
    println!("输入 1/2/3 切换视图，restart 重新开始，q 退出。");
}

fn dish_id_for_input(session: &PlannerSession<GoogleProvider>, input: &str) -> Option<String> {
    let index: usize = input.parse().ok()?;
    session
        .state
        .recommendations
        .get(index.checked_sub(1)?)
        .map(|dish| dish.id.clone())
}
