use battleship_lobby::{
    init_logging, GameSession, InMemoryBroker, LobbyController, PlayerClient, PlayerName,
    TopicHelper, DEFAULT_TOPIC_PREFIX,
};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Run the full lobby handshake on an in-memory bus.
    Demo {
        #[arg(long, default_value = DEFAULT_TOPIC_PREFIX)]
        prefix: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { prefix } => demo(prefix).await,
    }
}

async fn demo(prefix: String) -> anyhow::Result<()> {
    let broker = InMemoryBroker::new();
    let topics = TopicHelper::new(prefix);

    let mut controller = LobbyController::new(
        broker.client("controller"),
        topics.clone(),
        GameSession::new(),
    );
    controller.activate().await?;
    let controller_task = tokio::spawn(async move {
        controller.run().await?;
        Ok::<_, anyhow::Error>(controller)
    });

    let mut player1 = PlayerClient::new(broker.client("player1"), PlayerName::Player1, topics.clone());
    let mut player2 = PlayerClient::new(broker.client("player2"), PlayerName::Player2, topics);
    player1.connect().await?;
    player2.connect().await?;

    let join1 = player1.join().await?;
    println!("{}: {}", PlayerName::Player1, join1.message);
    let join2 = player2.join().await?;
    println!("{}: {}", PlayerName::Player2, join2.message);

    let start = player1.await_game_start().await?;
    println!(
        "game start: player1 present = {}, player2 present = {}",
        start.player1.is_some(),
        start.player2.is_some()
    );

    let set1 = player1.set_board().await?;
    println!("{}: {}", PlayerName::Player1, set1.message);
    let set2 = player2.set_board().await?;
    println!("{}: {}", PlayerName::Player2, set2.message);

    let mut controller = controller_task.await??;
    controller.detach().await?;
    for player in PlayerName::ALL {
        println!("{}", controller.status(player));
    }

    player1.disconnect().await?;
    player2.disconnect().await?;
    Ok(())
}
