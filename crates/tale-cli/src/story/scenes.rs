//! Locations and scenes of Moral Protocol.

use tale_engine::{EngineResult, Game, Location, Puzzle, WorldGraph};

/// Where the story begins.
pub const START: &str = "office";

const MAYA: &str = "Maya";
const KEYCARD: &str = "keycard";
const ACCESS_LOG: &str = "access log";

const TERMINAL_UNLOCKED: &str = "terminal_unlocked";
const MET_MAYA: &str = "met_maya";
const MAYA_ALLY: &str = "maya_ally";
const FOUND_KEYCARD: &str = "found_keycard";
const LEARNED_TRUTH: &str = "learned_truth";
const COFFEES: &str = "coffees";
const ENDING: &str = "ending";

/// Register every location of the story.
pub fn setup_locations(world: &mut WorldGraph) {
    world.register(
        Location::new(
            "office",
            "Your Office",
            "Your small office at Nexus Corp. A computer terminal sits on your desk.",
        )
        .connect("north", "hallway")
        .action("use terminal", use_terminal),
    );

    world.register(
        Location::new(
            "hallway",
            "Hallway",
            "A sterile corporate hallway with fluorescent lighting.",
        )
        .connect("south", "office")
        .connect("east", "lab")
        .connect("west", "break_room")
        .action("talk to colleague", colleague_conversation),
    );

    world.register(
        Location::new(
            "lab",
            "Research Lab",
            "Server racks hum behind a glass partition. On a workbench beyond it \
             sits a prototype unit stencilled AEGIS.",
        )
        .connect("west", "hallway")
        .action("inspect prototype", inspect_prototype),
    );

    world.register(
        Location::new(
            "break_room",
            "Break Room",
            "A cramped break room. A coffee machine gurgles next to a row of lockers.",
        )
        .connect("east", "hallway")
        .action("search lockers", search_lockers)
        .action("make coffee", make_coffee),
    );
}

fn use_terminal(game: &mut Game) -> EngineResult<bool> {
    game.header("Terminal")?;
    game.say("You sit down at the terminal. The screen glows with the Nexus Corp logo.")?;

    if game.check_flag(TERMINAL_UNLOCKED) {
        game.say("Your session is still open. The AEGIS folder is right where you left it.")?;
        game.pause()?;
        return Ok(true);
    }

    let login = Puzzle::new("LOGIN REQUIRED. Enter the department passphrase:", "humanity first")
        .with_hint("The company motto is printed on every mug in the break room.")
        .with_incorrect_message("ACCESS DENIED.");
    if !login.run(game)? {
        game.say("The terminal locks you out. Maybe try again later.")?;
        game.pause()?;
        return Ok(false);
    }

    game.set_flag(TERMINAL_UNLOCKED, true);
    game.say("A folder named AEGIS catches your eye. You copy its access log.")?;
    game.add_to_inventory(ACCESS_LOG)?;
    game.pause()?;
    Ok(true)
}

fn colleague_conversation(game: &mut Game) -> EngineResult<bool> {
    game.header("Conversation")?;
    game.say("Your colleague looks nervous as you approach.")?;
    if !game.check_flag(MET_MAYA) {
        game.say("\"Maya, compliance,\" she mutters, without looking up from her tablet.")?;
        game.set_flag(MET_MAYA, true);
    }

    let mut options = vec!["Ask what's wrong", "Tell her to get back to work"];
    if game.state().has_item(ACCESS_LOG) {
        options.push("Mention the AEGIS access log");
    }

    match game.choose("What do you say?", &options)? {
        1 => {
            game.say("She hesitates. \"Not here. Some of the lockers in the break room aren't as empty as they look.\"")?;
            game.relationship_change(MAYA, 1)?;
        }
        2 => {
            game.say("She flinches and turns back to her screen.")?;
            game.relationship_change(MAYA, -1)?;
        }
        _ => {
            game.say("Her eyes widen. \"You saw it too. My locker, the blue one. Take the keycard.\"")?;
            game.relationship_change(MAYA, 2)?;
            game.set_flag(MAYA_ALLY, true);
        }
    }

    game.pause()?;
    Ok(true)
}

fn search_lockers(game: &mut Game) -> EngineResult<bool> {
    game.header("Lockers")?;
    if game.check_flag(FOUND_KEYCARD) {
        game.say("You already took what was worth taking.")?;
        game.pause()?;
        return Ok(false);
    }

    if game.state().relationship(MAYA) < 1 {
        game.say("Every locker is shut tight. One blue door has a sticky note: \"M.\"")?;
        game.pause()?;
        return Ok(false);
    }

    game.say("The blue locker is unlatched. Under a spare jacket lies a lab keycard.")?;
    game.add_to_inventory(KEYCARD)?;
    game.set_flag(FOUND_KEYCARD, true);
    game.pause()?;
    Ok(true)
}

fn make_coffee(game: &mut Game) -> EngineResult<bool> {
    game.header("Coffee")?;
    let cups = game.increment_flag(COFFEES, 1)?;
    game.say("The machine wheezes and fills a mug printed with the company motto: HUMANITY FIRST.")?;
    if cups >= 3 {
        game.say("Your hands are shaking. Maybe that's enough coffee for today.")?;
    }
    game.pause()?;
    Ok(true)
}

fn inspect_prototype(game: &mut Game) -> EngineResult<bool> {
    game.header("AEGIS")?;
    if !game.state().has_item(KEYCARD) {
        game.say("A red light blinks on the partition lock. You need a keycard.")?;
        game.pause()?;
        return Ok(false);
    }

    game.say("The lock clicks green. Up close, the prototype's status display scrolls endlessly.")?;
    if !game.check_flag(TERMINAL_UNLOCKED) {
        game.say("Names, scores, addresses. Without context the readout means nothing to you.")?;
        game.pause()?;
        return Ok(true);
    }

    game.say("The names match the access log. AEGIS has been scoring citizens for 'compliance'.")?;
    game.set_flag(LEARNED_TRUTH, true);

    let ending = match game.choose(
        "What do you do?",
        &["Leak the logs", "Report it to management", "Walk away"],
    )? {
        1 => {
            game.say("You upload the logs to every newsroom you can reach. By morning, the world knows.")?;
            "whistleblower"
        }
        2 => {
            game.say("Management thanks you warmly. Your badge stops working the next day.")?;
            "company_loyalist"
        }
        _ => {
            game.say("You close the partition behind you and try to forget what you saw.")?;
            "bystander"
        }
    };
    game.set_flag(ENDING, ending);
    game.pause()?;
    game.end();
    Ok(true)
}
