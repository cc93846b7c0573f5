//! Deserialization tests for per-endpoint payload types against realistic
//! server JSON.

use osintcat_sdk::envelope::OsintResponse;
use osintcat_sdk::types::*;

mod breach_types {
    use super::*;

    #[test]
    fn aggregated_breach_result_deserializes() {
        let json = r#"{
            "leakcheck-results": {
                "success": true,
                "quota": 400,
                "found": 1,
                "result": [{
                    "email": "user@example.com",
                    "password": "hunter2",
                    "fields": ["email", "password"],
                    "source": {"name": "ExampleDump", "breach_date": "2020-03", "unverified": 0}
                }]
            },
            "snusbase-results": {
                "took": 12,
                "size": 1,
                "results": {
                    "dump_2021": [{"email": "user@example.com", "hash": "abc123", "uid": 991}]
                }
            },
            "hackcheck-results": {
                "found": 0,
                "databases": 0,
                "first_seen": "",
                "last_seen": "",
                "elapsed": "10ms",
                "results": []
            },
            "breachbase-results": {
                "status": "success",
                "took": 3,
                "found": 1,
                "content": [{"username": "user", "password": "hunter2", "origin": "dump.txt"}]
            }
        }"#;

        let result: BreachResult = serde_json::from_str(json).unwrap();

        let leakcheck = result.leakcheck.unwrap();
        assert_eq!(leakcheck.found, 1);
        assert_eq!(leakcheck.result[0].source.name, "ExampleDump");
        assert_eq!(leakcheck.result[0].password.as_deref(), Some("hunter2"));

        let snusbase = result.snusbase.unwrap();
        assert_eq!(snusbase.results["dump_2021"][0].uid, Some(991));

        assert!(result.hackcheck.unwrap().results.is_empty());
        assert_eq!(result.breachbase.unwrap().content.len(), 1);
        assert!(result.intelvault.is_none());
        assert!(result.leakosint.is_none());
    }

    #[test]
    fn leakosint_block_keeps_pascal_case_extras() {
        let json = r#"{
            "List": {
                "Some Dump": {
                    "Data": [{
                        "Email": "user@example.com",
                        "Password": "pw",
                        "FirstName": "Ada",
                        "Followers": 120,
                        "Verified": true
                    }],
                    "InfoLeak": "Example leak description",
                    "NumOfResults": 1
                }
            },
            "NumOfDatabase": 1,
            "NumOfResults": 1,
            "price": 0.1,
            "search time": 0.42
        }"#;

        let result: osintcat_sdk::types::breach::LeakosintResults =
            serde_json::from_str(json).unwrap();
        assert_eq!(result.num_of_database, 1);
        let entry = &result.list["Some Dump"].data[0];
        assert_eq!(entry.email.as_deref(), Some("user@example.com"));
        assert_eq!(entry.first_name.as_deref(), Some("Ada"));
        assert_eq!(entry.extra["Followers"], serde_json::json!(120));
        assert_eq!(entry.extra["Verified"], serde_json::json!(true));
    }
}

mod discord_types {
    use super::*;

    #[test]
    fn stalker_result_deserializes() {
        let json = r#"{
            "data": {
                "messages": [{
                    "author_name": "tester",
                    "channel_id": 111,
                    "content": "hello",
                    "guild_id": 222,
                    "guild_name": "Guild",
                    "isDeleted": 0,
                    "timestamp": "2024-05-01T12:00:00Z"
                }],
                "server_activity": [{
                    "guild_id": 222,
                    "guild_name": "Guild",
                    "joined_at": null,
                    "left_at": null,
                    "first_seen_fallback": "2024-01-01",
                    "last_seen_fallback": "2024-05-01",
                    "last_message": {"content": "hello", "timestamp": "2024-05-01T12:00:00Z"}
                }],
                "username_history": [{"display_name": "old_name", "first_seen": "2023-01-01"}],
                "voice_sessions": []
            },
            "elapsed_ms": 120,
            "query_author_id": "123456789012345678",
            "status": "ok"
        }"#;

        let result: DiscordStalkerResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.data.messages[0].guild_name, "Guild");
        assert_eq!(result.data.messages[0].is_deleted, 0);
        assert!(result.data.server_activity[0].joined_at.is_none());
        assert_eq!(result.data.username_history.len(), 1);
        assert_eq!(result.status, "ok");
    }

    #[test]
    fn discord_to_roblox_deserializes() {
        let json = r#"{
            "roblox_id": "12345",
            "name": "builderman",
            "displayName": "Builderman",
            "created": "2006-03-08T00:00:00Z",
            "description": "",
            "avatar": "https://example.com/avatar.png",
            "badges": [],
            "groupCount": 4
        }"#;

        let result: DiscordToRobloxResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.display_name, "Builderman");
        assert_eq!(result.group_count, 4);
    }
}

mod roblox_types {
    use super::*;

    #[test]
    fn profile_deserializes_mixed_casing() {
        let json = r#"{
            "id": 156,
            "name": "builderman",
            "displayName": "Builderman",
            "description": "Welcome",
            "created": "2006-03-08T00:00:00Z",
            "isBanned": false,
            "externalAppDisplayName": null,
            "hasVerifiedBadge": true,
            "avatar_url": "https://example.com/a.png",
            "groups": [{
                "group": {"id": 7, "name": "Official", "memberCount": 100, "hasVerifiedBadge": true},
                "role": {"id": 1, "name": "Member", "rank": 10}
            }],
            "friends_count": 25,
            "membership": true,
            "games": [{
                "id": 1818,
                "name": "Classic",
                "description": null,
                "creator": {"id": 156, "type": "User"},
                "rootPlace": {"id": 1818, "type": "Place"},
                "created": "2007-01-01T00:00:00Z",
                "updated": "2020-01-01T00:00:00Z",
                "placeVisits": 5000
            }],
            "roblox_badges": [{"id": 1, "name": "Admin", "description": "", "imageUrl": "https://example.com/b.png"}],
            "social_links": {"facebook": null, "twitter": "https://twitter.com/roblox", "youtube": null, "twitch": null, "guilded": null}
        }"#;

        let profile: RobloxProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name, "Builderman");
        assert!(!profile.is_banned);
        assert!(profile.external_app_display_name.is_none());
        assert_eq!(profile.groups[0].group.member_count, 100);
        assert_eq!(profile.games[0].place_visits, 5000);
        assert_eq!(profile.games[0].root_place.kind, "Place");
        assert_eq!(
            profile.social_links.twitter.as_deref(),
            Some("https://twitter.com/roblox")
        );
    }
}

mod lookup_types {
    use super::*;

    #[test]
    fn ip_lookup_maps_the_as_field() {
        let json = r#"{
            "ip": "1.1.1.1",
            "country": "Australia",
            "region": "QLD",
            "city": "Brisbane",
            "zip": "4101",
            "lat": -27.47,
            "lon": 153.02,
            "timezone": "Australia/Brisbane",
            "isp": "Cloudflare, Inc",
            "org": "APNIC and Cloudflare DNS Resolver project",
            "as": "AS13335 Cloudflare, Inc.",
            "query": "1.1.1.1"
        }"#;

        let result: IpLookupResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.autonomous_system.as_deref(),
            Some("AS13335 Cloudflare, Inc.")
        );
        assert_eq!(result.lat, Some(-27.47));
    }

    #[test]
    fn dns_result_keeps_record_type_keys() {
        let json = r#"{
            "A": ["93.184.216.34"],
            "MX": [{"name": "mail.example.com", "priority": 10}],
            "TXT": ["v=spf1 -all"],
            "SOA": [{
                "mname": "ns.example.com",
                "rname": "hostmaster.example.com",
                "serial": 2024060101,
                "refresh": 7200,
                "retry": 3600,
                "expire": 1209600,
                "minimum": 3600
            }]
        }"#;

        let result: DnsResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.a.unwrap(), vec!["93.184.216.34"]);
        assert_eq!(result.mx.unwrap()[0].priority, 10);
        assert!(result.aaaa.is_none());
        assert_eq!(result.soa.unwrap()[0].serial, 2024060101);
    }

    #[test]
    fn chilean_results_come_as_an_array() {
        let json = r#"{
            "success": true,
            "data": [{
                "name": "JUAN PEREZ",
                "firstName": "JUAN",
                "lastName": "PEREZ",
                "rut": "12.345.678-9",
                "gender": "M",
                "address": "CALLE FALSA 123",
                "city": "SANTIAGO"
            }]
        }"#;

        let resp: OsintResponse<Vec<ChileanNameResult>> = serde_json::from_str(json).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data[0].first_name, "JUAN");
        assert_eq!(data[0].rut, "12.345.678-9");
    }

    #[test]
    fn minecraft_result_deserializes() {
        let json = r#"{
            "breach_results": [{"line": "player:password123", "source": "mc_dump.txt"}],
            "elapsed_ms": 85,
            "note": "partial index",
            "query": "player",
            "results": 1,
            "status": "ok"
        }"#;

        let result: MinecraftResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.breach_results[0].source, "mc_dump.txt");
        assert_eq!(result.results, 1);
    }

    #[test]
    fn domain_result_deserializes() {
        let json = r#"{
            "search_term": "example.com",
            "results": {
                "emails": [{"email": "admin@example.com", "password": "pw"}],
                "domains": [{"domain": "example.com", "username": "admin", "password": "pw"}],
                "urls": [{"url": "https://example.com/login"}],
                "subdomains": []
            },
            "source": "akula",
            "response_time": 0.8
        }"#;

        let result: DomainResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.results.emails[0].email, "admin@example.com");
        assert_eq!(result.results.urls.len(), 1);
        assert!(result.results.subdomains.is_empty());
    }
}

mod username_types {
    use super::*;

    #[test]
    fn multi_source_result_tolerates_partial_sources() {
        let json = r#"{
            "akula": {
                "success": true,
                "search_term": "tester",
                "source": "akula",
                "response_time": 1.2,
                "results": {"domains": [], "emails": [], "urls": [{"url": "https://example.com/u/tester"}]}
            },
            "instagram": {
                "button_title": "OK",
                "error_title": "",
                "message": "We sent an email",
                "status": "ok",
                "uh_eligible": true
            },
            "tiktok": {"error": "not found"},
            "twitter": {
                "user_id": 42,
                "username": "tester",
                "display_name": "Tester",
                "description": "",
                "location": "",
                "stats": {"followers": 10, "following": 5, "tweets": 99},
                "verification_details": {"is_blue_verified": false, "is_identity_verified": false, "reason": null},
                "profile_image_shape": "Circle"
            },
            "xbox": null
        }"#;

        let result: UsernameResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.akula.unwrap().results.urls.len(), 1);
        assert!(result.instagram.unwrap().uh_eligible);
        assert_eq!(result.tiktok.unwrap().error.as_deref(), Some("not found"));

        let twitter = result.twitter.unwrap();
        assert_eq!(twitter.stats.unwrap().tweets, 99);
        assert!(!twitter.verification_details.unwrap().is_blue_verified);

        assert!(result.leakcheck.is_none());
        assert!(result.stealer.is_none());
    }

    #[test]
    fn stealer_block_deserializes() {
        let json = r#"{
            "json": {
                "Username": "tester",
                "Country": "US",
                "HWID": "ABC-123",
                "DateBreach": "2023-11",
                "passwords": [
                    {"url": "https://example.com", "user": "tester", "password": "pw"}
                ]
            }
        }"#;

        let result: osintcat_sdk::types::username::StealerResult =
            serde_json::from_str(json).unwrap();
        assert_eq!(result.json.hwid.as_deref(), Some("ABC-123"));
        assert_eq!(result.json.passwords.len(), 1);
    }
}
