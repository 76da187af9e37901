use log::{error, info};
use macroquad::prelude::*;
use toroidal_life::{
    Command, Config, GameState, Mode,
    input::{self, TickTimer},
    rendering,
};

fn window_conf() -> Conf {
    let config = Config::default();
    let (width, height) = config.window_size();
    Conf {
        window_title: Config::WINDOW_TITLE.to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    
    let config = match Config::new(
        Config::DEFAULT_WIDTH,
        Config::DEFAULT_HEIGHT,
        Config::DEFAULT_CELL_SIZE,
        Config::DEFAULT_BORDER_SIZE,
        Config::DEFAULT_TICK_INTERVAL,
    ) {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            return;
        }
    };
    
    // Window close is turned into a Quit event instead of killing the process
    prevent_quit();
    
    let mut state = GameState::new(&config);
    let mut timer = TickTimer::new();
    let mut glyph = Mode::Paused;
    let mut pending = state.start();
    
    info!("Board {}x{}, tick every {:?}", config.width, config.height, config.tick_interval);
    
    'event_loop: loop {
        pending.extend(
            input::poll_events(&mut timer)
                .into_iter()
                .flat_map(|event| state.handle(event)),
        );
        
        for command in pending.drain(..) {
            match command {
                // The whole scene is redrawn below on every frame
                Command::Render => {}
                Command::RenderControlGlyph(mode) => glyph = mode,
                Command::ArmTick(interval) => timer.arm(get_time(), interval),
                Command::DisarmTick => timer.disarm(),
                Command::Shutdown => break 'event_loop,
            }
        }
        
        rendering::draw_background();
        rendering::draw_control_glyph(glyph, &state.layout);
        rendering::draw_control_strip(&state.layout, state.generation, state.grid.population());
        rendering::draw_grid(&state.grid, &state.layout);
        
        next_frame().await;
    }
    
    info!("Window closed");
}
