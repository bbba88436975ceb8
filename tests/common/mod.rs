#![allow(dead_code)]

use league_dragon::{Doer, DragonError, Request, Response, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

pub const DATA_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/14.1.1/data/en_US";
pub const LEGACY_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/7.23.1/data/en_US";

#[derive(Clone)]
enum Route {
    Reply(u16, String),
    Fail(String),
}

/// In-memory transport that answers from a route table and counts calls per URL.
/// Unrouted URLs answer 404.
#[derive(Default)]
pub struct ScriptedDoer {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<HashMap<String, usize>>,
    delay: Duration,
}

impl ScriptedDoer {
    pub fn new() -> Self {
        ScriptedDoer::default()
    }

    /// Holds every response for `delay` to widen race windows.
    pub fn with_delay(delay: Duration) -> Self {
        ScriptedDoer {
            delay,
            ..ScriptedDoer::default()
        }
    }

    pub fn reply(&self, url: &str, status: u16, body: impl Into<String>) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Reply(status, body.into()));
    }

    pub fn ok(&self, url: &str, body: impl Into<String>) {
        self.reply(url, 200, body);
    }

    pub fn fail(&self, url: &str, reason: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Fail(reason.to_string()));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

impl Doer for ScriptedDoer {
    fn execute(&self, request: &Request) -> Result<Response> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(request.url.clone())
            .or_insert(0) += 1;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let route = self.routes.lock().unwrap().get(&request.url).cloned();
        match route {
            Some(Route::Reply(status, body)) => Ok(Response {
                status,
                body: body.into_bytes(),
            }),
            Some(Route::Fail(reason)) => Err(DragonError::Transport(reason)),
            None => Ok(Response {
                status: 404,
                body: Vec::new(),
            }),
        }
    }
}

pub fn envelope(kind: &str, data: Value) -> String {
    json!({
        "type": kind,
        "format": "standAloneComplex",
        "version": "14.1.1",
        "data": data,
    })
    .to_string()
}

pub fn champion_listing() -> String {
    envelope(
        "champion",
        json!({
            "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri", "title": "the Nine-Tailed Fox", "tags": ["Mage", "Assassin"] },
            "Garen": { "id": "Garen", "key": "86", "name": "Garen", "title": "The Might of Demacia", "tags": ["Fighter"] },
            "MonkeyKing": { "id": "MonkeyKing", "key": "62", "name": "Wukong", "title": "the Monkey King", "tags": ["Fighter"] },
        }),
    )
}

pub fn champion_detail(id: &str, name: &str, lore: &str) -> String {
    let mut data = serde_json::Map::new();
    data.insert(
        id.to_string(),
        json!({
            "id": id,
            "name": name,
            "title": "detailed",
            "lore": lore,
            "allytips": ["tip"],
            "skins": [{ "id": "1000", "num": 0, "name": "default", "chromas": false }],
            "spells": [{ "id": "Q", "name": "First", "cooldown": [7.0, 6.0] }],
            "passive": { "name": "Passive", "description": "does things" },
            "image": { "full": format!("{}.png", id), "group": "champion" }
        }),
    );
    envelope("champion", Value::Object(data))
}

pub fn items() -> String {
    envelope(
        "item",
        json!({
            "1001": { "name": "Boots", "gold": { "base": 300, "total": 300, "sell": 210, "purchasable": true }, "tags": ["Boots"] },
            "3031": { "name": "Infinity Edge", "from": ["1038"], "gold": { "total": 3400 } },
        }),
    )
}

pub fn runes() -> String {
    envelope(
        "rune",
        json!({
            "5001": { "name": "Lesser Mark of Attack Damage", "rune": { "isrune": true, "tier": "1", "type": "red" } },
        }),
    )
}

pub fn masteries() -> String {
    envelope(
        "mastery",
        json!({
            "6111": { "id": 6111, "name": "Fury", "description": ["+0.8% Attack Speed"], "ranks": 5, "prereq": "0" },
            "6114": { "id": 6114, "name": "Sorcery", "ranks": 5 },
        }),
    )
}

pub fn profile_icons() -> String {
    envelope(
        "profileicon",
        json!({
            "29": { "id": 29, "image": { "full": "29.png", "group": "profileicon" } },
            "0": { "id": 0, "image": { "full": "0.png", "group": "profileicon" } },
        }),
    )
}

pub fn summoner_spells() -> String {
    envelope(
        "summoner",
        json!({
            "SummonerFlash": { "id": "SummonerFlash", "key": "4", "name": "Flash", "cooldown": [300.0], "summonerLevel": 7 },
            "SummonerDot": { "id": "SummonerDot", "key": "14", "name": "Ignite", "cooldown": [180.0], "summonerLevel": 9 },
        }),
    )
}

/// A doer answering every dataset endpoint for version 14.1.1 / en_US.
pub fn full_service(delay: Duration) -> ScriptedDoer {
    let doer = ScriptedDoer::with_delay(delay);
    doer.ok(&format!("{}/champion.json", DATA_BASE), champion_listing());
    doer.ok(&format!("{}/item.json", DATA_BASE), items());
    doer.ok(&format!("{}/profileicon.json", DATA_BASE), profile_icons());
    doer.ok(&format!("{}/summoner.json", DATA_BASE), summoner_spells());
    doer.ok(&format!("{}/rune.json", LEGACY_BASE), runes());
    doer.ok(&format!("{}/mastery.json", LEGACY_BASE), masteries());
    doer
}
